// Listing and submission flows, wired on top of `VideoApi`.

use crate::api::VideoApi;
use crate::error::{Result, UgcError};
use crate::poller::{PollObserver, Poller, Sleeper};
use crate::types::{Avatar, GenerationRequest, JobHandle};
use crate::ui;
use serde_json::Value;
use std::io::Write;

/// Fetches the avatar listing and prints it.
pub fn list_avatars<A, W>(api: &A, out: &mut W) -> Result<Vec<Avatar>>
where
    A: VideoApi + ?Sized,
    W: Write,
{
    let body = api.fetch_avatars()?;
    let avatars = Avatar::list_from_response(&body);
    tracing::debug!(count = avatars.len(), "fetched avatars");
    ui::print_avatars(out, &avatars)?;
    Ok(avatars)
}

/// Submits one generation job and returns its handle.
///
/// The script must already be validated as non-empty. A success response
/// without a recognizable id is a protocol error carrying the raw body.
pub fn submit<A, W>(api: &A, request: &GenerationRequest, out: &mut W) -> Result<JobHandle>
where
    A: VideoApi + ?Sized,
    W: Write,
{
    ui::print_submitting(out, &request.name)?;
    let body = api.submit_generation(request)?;
    let job = JobHandle::from_response(&body).ok_or_else(|| UgcError::Protocol(ui::pretty(&body)))?;
    tracing::debug!(job = %job.id, "submitted generation request");
    ui::print_submitted(out, &job.id)?;
    Ok(job)
}

/// Submits, waits for a terminal status and prints the download link.
/// Returns the final status response.
pub fn generate<A, W, S, O>(
    api: &A,
    request: &GenerationRequest,
    poller: &mut Poller<S>,
    observer: &mut O,
    out: &mut W,
) -> Result<Value>
where
    A: VideoApi + ?Sized,
    W: Write,
    S: Sleeper,
    O: PollObserver + ?Sized,
{
    let job = submit(api, request, out)?;
    out.flush()?;
    let response = poller.wait_for(api, &job, observer)?;
    ui::print_ready(out, &response)?;
    Ok(response)
}

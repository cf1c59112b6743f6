// Command-line surface and dispatch. `run` is what the binary calls; it
// resolves the credential before anything touches the network, then
// hands off to the listing or generation flow.

use crate::api::{ApiClient, VideoApi};
use crate::error::{Result, UgcError};
use crate::poller::{PollObserver, Poller, Sleeper};
use crate::types::{GenerationRequest, DEFAULT_VIDEO_NAME};
use crate::ui::ProgressLine;
use crate::workflow;
use clap::Parser;
use std::io::{self, Write};

/// Generate AI UGC marketing videos via the MakeUGC API.
#[derive(Debug, Clone, Parser)]
#[command(name = "makeugc", version)]
#[command(about = "Generate AI UGC marketing videos via MakeUGC API")]
pub struct Cli {
    /// The spoken script/dialogue for the video
    #[arg(long)]
    pub script: Option<String>,

    /// Avatar ID to use (optional)
    #[arg(long)]
    pub avatar: Option<String>,

    /// Name for the video
    #[arg(long, default_value = DEFAULT_VIDEO_NAME)]
    pub name: String,

    /// List available avatars and exit
    #[arg(long)]
    pub list_avatars: bool,

    /// Log requests and poll ticks to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// What a run will do, decided from the parsed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ListAvatars,
    Generate(GenerationRequest),
}

impl Cli {
    /// Picks the action. `--list-avatars` wins over everything else;
    /// otherwise a non-empty `--script` is required. Its content is sent
    /// as given.
    pub fn action(&self) -> Result<Action> {
        if self.list_avatars {
            if self.script.is_some() {
                tracing::debug!("--list-avatars given, ignoring --script");
            }
            return Ok(Action::ListAvatars);
        }
        let script = self
            .script
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                UgcError::Usage("--script is required (unless using --list-avatars)".into())
            })?;
        Ok(Action::Generate(
            GenerationRequest::new(script)
                .with_name(self.name.clone())
                .with_avatar(self.avatar.clone()),
        ))
    }
}

/// Runs the tool against the real service.
pub fn run(cli: &Cli) -> Result<()> {
    let api = ApiClient::from_env()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut poller = Poller::from_config(api.config());
    let mut progress = ProgressLine::new();
    execute(cli, &api, &mut poller, &mut progress, &mut out)
}

/// Dispatches `cli` against any [`VideoApi`].
pub fn execute<A, S, O, W>(
    cli: &Cli,
    api: &A,
    poller: &mut Poller<S>,
    observer: &mut O,
    out: &mut W,
) -> Result<()>
where
    A: VideoApi + ?Sized,
    S: Sleeper,
    O: PollObserver + ?Sized,
    W: Write,
{
    match cli.action()? {
        Action::ListAvatars => {
            workflow::list_avatars(api, out)?;
        }
        Action::Generate(request) => {
            workflow::generate(api, &request, poller, observer, out)?;
        }
    }
    out.flush()?;
    Ok(())
}

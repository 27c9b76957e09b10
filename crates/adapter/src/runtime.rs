//! Adapter runtime.
//!
//! Drives a [`QuizSession`] from line-delimited JSON commands. The session is
//! owned by the loop; every non-blank input line yields exactly one output
//! line.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::core::QuizSession;
use crate::protocol::*;

/// Apply one command line to the session and build its response.
pub fn handle_line(session: &mut QuizSession, line: &str) -> Response {
    let msg = match parse_message(line) {
        Ok(msg) => msg,
        Err(e) => {
            warn!(error = %e, "rejected command line");
            return Response::Error(create_error(ErrorCode::InvalidJson, e.to_string()));
        }
    };

    let before = session.snapshot();
    match msg {
        InboundMessage::SelectMode { mode } => match parse_mode(&mode) {
            Ok(mode) => session.select_mode(mode),
            Err(err) => return Response::Error(err),
        },
        InboundMessage::NewQuestion => {
            session.generate_question();
        }
        InboundMessage::Answer { value } => {
            session.submit_answer(value);
        }
        InboundMessage::Restart => session.restart(),
        InboundMessage::Observe => {}
    }

    let after = session.snapshot();
    Response::Observation(build_observation(&after, after != before))
}

async fn write_response<W>(writer: &mut W, buf: &mut Vec<u8>, resp: &Response) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    buf.clear();
    serde_json::to_writer(&mut *buf, resp).context("serialize response")?;
    buf.push(b'\n');
    writer.write_all(buf.as_slice()).await?;
    writer.flush().await?;
    Ok(())
}

/// Serve commands from `reader` until EOF.
///
/// The first line written is an observation of the session as passed in.
pub async fn serve<R, W>(reader: R, mut writer: W, session: &mut QuizSession) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf: Vec<u8> = Vec::with_capacity(1024);
    let initial = Response::Observation(build_observation(&session.snapshot(), false));
    write_response(&mut writer, &mut buf, &initial).await?;

    let mut lines = reader.lines();
    let mut handled: u64 = 0;
    while let Some(line) = lines.next_line().await.context("read command line")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let resp = handle_line(session, line);
        handled += 1;
        debug!(handled, error = resp.is_error(), "command handled");
        write_response(&mut writer, &mut buf, &resp).await?;
    }

    info!(handled, "input closed");
    Ok(())
}

/// Run the adapter over process stdin/stdout on a current-thread runtime.
pub fn run_stdio(session: &mut QuizSession) -> Result<()> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("create tokio runtime")?;
    rt.block_on(async {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        serve(stdin, stdout, session).await
    })
}

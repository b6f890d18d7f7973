use std::io;
use std::process::Stdio;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::task::JoinHandle;

use crate::core::models::InvocationResult;

/// Spawns a command and waits for it to exit, capturing stdout and stderr
/// separately as text. Nothing is streamed; both buffers are complete when
/// this returns.
///
/// Both pipes are drained concurrently while the child runs so that a child
/// filling one pipe cannot block on it.
///
/// # Returns
/// The captured output and exit status, or the `io::Error` raised when the
/// process could not be started or waited on.
///
/// 派生一个命令并等待其退出，分别以文本形式捕获 stdout 和 stderr。
/// 不进行流式输出；返回时两个缓冲区都是完整的。
pub async fn spawn_and_capture(mut cmd: tokio::process::Command) -> io::Result<InvocationResult> {
    let mut child = cmd
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| io::Error::other("failed to capture stdout"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| io::Error::other("failed to capture stderr"))?;

    let stdout_handle = drain(stdout);
    let stderr_handle = drain(stderr);

    let status = child.wait().await?;

    let stdout = join_drain(stdout_handle).await?;
    let stderr = join_drain(stderr_handle).await?;

    Ok(InvocationResult {
        stdout,
        stderr,
        status,
    })
}

/// Reads a pipe to the end on its own task.
fn drain<R>(mut reader: R) -> JoinHandle<io::Result<Vec<u8>>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).await?;
        Ok(buf)
    })
}

async fn join_drain(handle: JoinHandle<io::Result<Vec<u8>>>) -> io::Result<String> {
    let bytes = handle.await.map_err(io::Error::other)??;
    // Invalid UTF-8 is replaced rather than failing the whole capture.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

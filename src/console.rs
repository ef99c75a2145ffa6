/// 콘솔 입출력 (tokio 비동기 reader/writer)
// region:    --- Imports
use crate::error::Result;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
// endregion: --- Imports

// region:    --- Console
pub struct Console<R, W> {
    lines: Lines<R>,
    out: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, out: W) -> Self {
        Self {
            lines: reader.lines(),
            out,
        }
    }

    pub async fn print(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.flush().await?;
        Ok(())
    }

    pub async fn println(&mut self, text: &str) -> Result<()> {
        self.print(text).await?;
        self.print("\n").await
    }

    /// 메시지 출력 후 한 줄 입력, 입력이 끝나면 None
    pub async fn prompt_string(&mut self, msg: &str) -> Result<Option<String>> {
        self.print(msg).await?;
        Ok(self.lines.next_line().await?)
    }

    /// 숫자 입력, 잘못된 값이면 다시 물어봄
    pub async fn prompt_number<T>(
        &mut self,
        msg: &str,
        accept: impl Fn(&T) -> bool,
    ) -> Result<Option<T>>
    where
        T: FromStr,
    {
        loop {
            let Some(line) = self.prompt_string(msg).await? else {
                return Ok(None);
            };
            match line.trim().parse::<T>() {
                Ok(value) if accept(&value) => return Ok(Some(value)),
                _ => self.println("Must enter a number").await?,
            }
        }
    }

    pub fn into_writer(self) -> W {
        self.out
    }
}
// endregion: --- Console

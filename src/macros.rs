/// Ensure prompts can be drawn (inquire renders on stderr) or bail with the
/// provided message
#[macro_export]
macro_rules! interact_or {
    ($message:expr) => {
        if !std::io::stderr().is_terminal() {
            use anyhow::bail;
            bail!($message);
        }
    };
}

/// Copies `text` to the system clipboard.
///
/// Fails on headless sessions with no clipboard provider; callers report the
/// error and carry on.
pub fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_owned())
}

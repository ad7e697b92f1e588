/// Splits text into lines the way a text-mode reader returns them: every
/// line keeps its `\n` terminator, the last line may lack one, and `\r\n`
/// or a lone `\r` is read as `\n`.
pub fn split_lines(content: &str) -> Vec<String> {
    let normalized = normalize_newlines(content);
    normalized
        .split_inclusive('\n')
        .map(str::to_string)
        .collect()
}

fn normalize_newlines(content: &str) -> String {
    if !content.contains('\r') {
        return content.to_string();
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}

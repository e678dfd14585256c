/// Returns true when a translation looks like the engine did nothing.
///
/// Some engines echo the input back instead of failing when they cannot
/// translate, so blank output and output identical to the input (ignoring
/// surrounding whitespace) are both treated as suspect.
pub fn looks_suspect(original: &str, translated: &str) -> bool {
    let translated = translated.trim();
    translated.is_empty() || translated == original.trim()
}

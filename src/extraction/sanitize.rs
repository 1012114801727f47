/// Strip control characters left behind by PDF text layers. Line breaks
/// and tabs survive; everything printable is kept as-is.
pub fn sanitize_extracted_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\t'))
        .collect()
}

/// Reduce a client-supplied filename to a safe basename.
pub fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();

    let sanitized: String = base
        .chars()
        .filter(|&c| c != '\0')
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let sanitized = sanitized.replace("..", "");
    let sanitized: String = sanitized.chars().take(100).collect();

    if sanitized.is_empty() {
        "document.pdf".into()
    } else {
        sanitized
    }
}

/// Case-insensitive `.pdf` extension check on the name as submitted.
pub fn has_pdf_extension(name: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("pdf"))
}

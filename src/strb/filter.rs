//! Text clean-up applied to every record read from a string table.

const LINE_BREAK: &str = "<br />";

/// Element icon codes embedded in skill text, mapped to the battle element they depict.
const ICON_TOKENS: [(&str, &str); 4] = [
    ("<img=24>", "{{Passion}}"),
    ("<img=25>", "{{Cool}}"),
    ("<img=26>", "{{Dark}}"),
    ("<img=27>", "{{Light}}"),
];

/// Byte sequences that were mis-decoded upstream, with what they should read as.
const MOJIBAKE: [(&str, &str); 3] = [("ÔºÖ", "%"), ("‚ô™", "♪"), ("‚Ä¶‚Ä¶", "..... ")];

/// Normalize one raw text record.
///
/// Newlines become `<br />`, element icon tokens become `{{Element}}` templates and the
/// literal record `null` (an empty slot in the table) becomes empty text.
pub fn normalize(raw: &str) -> String {
    if raw == "null" {
        return String::new();
    }

    let mut text = raw.replace('\n', LINE_BREAK).replace("<i><break>", LINE_BREAK);
    for (garbled, fixed) in MOJIBAKE {
        text = text.replace(garbled, fixed);
    }
    for (token, element) in ICON_TOKENS {
        text = text.replace(token, element);
    }

    let doubled = "<br /><br />";
    while text.contains(doubled) {
        text = text.replace(doubled, LINE_BREAK);
    }
    text
}

/// Give every `/` in skill text exactly one space on each side: `ATK/DEF  /HP` reads
/// `ATK / DEF / HP`. The `/` inside `<br />` markers is left alone.
pub fn space_slashes(text: &str) -> String {
    text.split(LINE_BREAK)
        .map(space_segment)
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}

fn space_segment(segment: &str) -> String {
    let pieces: Vec<&str> = segment.split('/').collect();
    let last = pieces.len() - 1;
    pieces
        .into_iter()
        .enumerate()
        .map(|(i, piece)| {
            let piece = if i > 0 {
                piece.trim_start_matches(is_space)
            } else {
                piece
            };
            if i < last {
                piece.trim_end_matches(is_space)
            } else {
                piece
            }
        })
        .collect::<Vec<_>>()
        .join(" / ")
}

fn is_space(c: char) -> bool {
    c.is_ascii_whitespace()
}

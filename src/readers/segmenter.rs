/// One blank-line-delimited block of trimmed, non-empty lines
pub type Segment = Vec<String>;

/// Split raw lines into segments; runs of blank lines never yield empty segments
pub fn segment_lines<I, S>(lines: I) -> Vec<Segment>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut segments = Vec::new();
    let mut current = Segment::new();

    for line in lines {
        let line = line.as_ref().trim();
        if !line.is_empty() {
            current.push(line.to_string());
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use crate::bundle::structs::pem_block::PemBlock;

pub const CERTIFICATE_LABEL: &str = "CERTIFICATE";

const BEGIN_PREFIX: &str = "-----BEGIN ";
const END_PREFIX: &str = "-----END ";
const BOUNDARY_SUFFIX: &str = "-----";

/// Decodes every well-framed PEM block in `input`, in source order.
///
/// Text outside blocks is ignored. A `BEGIN` line without a matching `END`
/// line, or a block whose body is not valid base64, is passed over and the
/// scan resumes on the line after its `BEGIN` line.
pub fn decode_pem_blocks(input: &[u8]) -> Vec<PemBlock>
{
    let text = String::from_utf8_lossy(input);
    let lines: Vec<&str> = text.lines().collect();
    let mut blocks = Vec::new();
    let mut index = 0;
    while index < lines.len() {
        let label = match begin_label(lines[index]) {
            None => {
                index += 1;
                continue;
            }
            Some(label) => label
        };
        let end_marker = format!("{}{}{}", END_PREFIX, label, BOUNDARY_SUFFIX);
        let body_start = index + 1;
        let end = lines[body_start..]
            .iter()
            .position(|line| line.trim_end() == end_marker);
        match end.and_then(|offset| decode_body(label, &lines[body_start..body_start + offset]).map(|block| (offset, block))) {
            Some((offset, block)) => {
                blocks.push(block);
                index = body_start + offset + 1;
            }
            None => {
                index += 1;
            }
        }
    }
    blocks
}

fn begin_label(line: &str) -> Option<&str>
{
    line.trim_end()
        .strip_prefix(BEGIN_PREFIX)?
        .strip_suffix(BOUNDARY_SUFFIX)
}

fn decode_body(label: &str, body: &[&str]) -> Option<PemBlock>
{
    let mut headers = Vec::new();
    let mut rest = body;
    while let Some((first, tail)) = rest.split_first() {
        match first.split_once(':') {
            Some((key, value)) => {
                headers.push((key.trim().to_string(), value.trim().to_string()));
                rest = tail;
            }
            None => break
        }
    }
    let encoded: String = rest
        .iter()
        .flat_map(|line| line.chars())
        .filter(|c| !c.is_whitespace())
        .collect();
    let contents = STANDARD.decode(encoded.as_bytes()).ok()?;
    Some(PemBlock {
        label: label.to_string(),
        headers,
        contents,
    })
}

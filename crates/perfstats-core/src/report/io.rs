use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::PerfstatsError;
use crate::report::model::{Element, GroupNode, ReportDocument};

/// Name of the elements that carry one test case each.
pub const GROUP_ELEMENT: &str = "Group";

/// Read a stats report from disk and parse it into a [`ReportDocument`].
///
/// Any failure to read the file or any well-formedness problem is reported
/// as [`PerfstatsError::Parse`] naming the path. Only UTF-8 (optionally with
/// a BOM) is supported; a file in any other encoding is rejected even if its
/// XML declaration names that encoding.
pub fn load_report(path: impl AsRef<Path>) -> Result<ReportDocument, PerfstatsError> {
    let path = path.as_ref();
    let source = path.display().to_string();
    let bytes = std::fs::read(path).map_err(|e| PerfstatsError::parse(&source, e))?;
    let content = String::from_utf8(bytes).map_err(|e| {
        PerfstatsError::parse(
            &source,
            format!("file is not valid UTF-8 ({e}); only UTF-8 reports are supported"),
        )
    })?;
    tracing::debug!(path = %source, bytes = content.len(), "loaded report file");

    let document = parse_report(&content, &source)?;
    tracing::debug!(
        path = %source,
        root = %document.root_name,
        groups = document.groups.len(),
        "parsed report"
    );
    Ok(document)
}

/// Parse report XML held in memory. `source` is only used in error messages.
pub fn parse_report(xml: &str, source: &str) -> Result<ReportDocument, PerfstatsError> {
    let xml = xml.trim_start_matches('\u{feff}');
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let fail = |reader: &Reader<&[u8]>, reason: String| {
        PerfstatsError::parse(
            source,
            format!("{reason} (at byte {})", reader.buffer_position()),
        )
    };

    let mut document = ReportDocument::default();
    let mut root_seen = false;
    // Names of the currently open elements, outermost first.
    let mut open: Vec<String> = Vec::new();
    let mut current: Option<GroupNode> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| fail(&reader, e.to_string()))?;

        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let is_empty = matches!(event, Event::Empty(_));
                let name = element_name(e);
                let attributes = read_attributes(e).map_err(|r| fail(&reader, r))?;

                match open.len() {
                    0 => {
                        if root_seen {
                            return Err(fail(
                                &reader,
                                format!("unexpected element <{name}> after the root element"),
                            ));
                        }
                        root_seen = true;
                        document.root_name = name.clone();
                    }
                    1 if name == GROUP_ELEMENT => {
                        let node = GroupNode {
                            label: attributes
                                .iter()
                                .find(|(k, _)| k == "label")
                                .map(|(_, v)| v.clone()),
                            children: Vec::new(),
                        };
                        if is_empty {
                            document.groups.push(node);
                        } else {
                            current = Some(node);
                        }
                    }
                    2 => {
                        if let Some(group) = current.as_mut() {
                            group.children.push(Element {
                                name: name.clone(),
                                attributes,
                            });
                        }
                    }
                    _ => {}
                }

                if !is_empty {
                    open.push(name);
                }
            }
            Event::End(ref e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                match open.pop() {
                    Some(expected) if expected == name => {}
                    Some(expected) => {
                        return Err(fail(
                            &reader,
                            format!("expected </{expected}>, found </{name}>"),
                        ))
                    }
                    None => {
                        return Err(fail(&reader, format!("unmatched closing tag </{name}>")))
                    }
                }
                if open.len() == 1 {
                    if let Some(group) = current.take() {
                        document.groups.push(group);
                    }
                }
            }
            Event::Text(ref t) => {
                let text = t.unescape().map_err(|e| fail(&reader, e.to_string()))?;
                if open.is_empty() && !text.trim().is_empty() {
                    return Err(fail(
                        &reader,
                        "text content outside the root element".to_string(),
                    ));
                }
            }
            Event::Comment(ref c) => {
                let body: &[u8] = c;
                if body.windows(2).any(|w| w == b"--") || body.ends_with(b"-") {
                    return Err(fail(&reader, "'--' is not allowed inside a comment".to_string()));
                }
            }
            Event::CData(_) if open.is_empty() => {
                return Err(fail(
                    &reader,
                    "CDATA section outside the root element".to_string(),
                ));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(fail(
            &reader,
            format!("unexpected end of document: <{unclosed}> is not closed"),
        ));
    }
    if !root_seen {
        return Err(fail(&reader, "document has no root element".to_string()));
    }

    Ok(document)
}

fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

fn read_attributes(e: &BytesStart<'_>) -> Result<Vec<(String, String)>, String> {
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| err.to_string())?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value().map_err(|err| err.to_string())?;
        attributes.push((key, value.into_owned()));
    }
    Ok(attributes)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

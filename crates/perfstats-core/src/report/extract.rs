use std::str::FromStr;

use crate::config::DataErrorPolicy;
use crate::error::PerfstatsError;
use crate::report::model::{Element, Group, GroupNode, OrderedCounts, Report, ReportDocument};

/// Label reported in errors for a group without a `label` attribute.
const UNLABELLED: &str = "<unlabelled>";

impl Group {
    /// Interpret one `Group` node.
    ///
    /// `succ`, `fail` and `avg_rt` are required. Every `perc`, `rc` and
    /// `bytes` element that is present must carry valid values; absent
    /// percentiles and an absent `bytes` element are allowed.
    pub fn from_node(node: &GroupNode) -> Result<Group, PerfstatsError> {
        let label = node
            .label
            .clone()
            .ok_or_else(|| PerfstatsError::data(UNLABELLED, "label", "missing attribute"))?;

        let success_count = required_value::<u64>(node, &label, "succ")?;
        let failure_count = required_value::<u64>(node, &label, "fail")?;
        let avg_response_time_secs = required_value::<f64>(node, &label, "avg_rt")?;

        let mut percentiles: Vec<(String, f64)> = Vec::new();
        for perc in node.find_all("perc") {
            let param = attribute(perc, &label, "param")?.to_string();
            let value = parse_value::<f64>(perc, &label)?;
            match percentiles.iter_mut().find(|(p, _)| *p == param) {
                Some(entry) => entry.1 = value,
                None => percentiles.push((param, value)),
            }
        }

        let mut http_codes = OrderedCounts::new();
        for rc in node.find_all("rc") {
            let code = attribute(rc, &label, "param")?;
            http_codes.insert(code, parse_value::<u64>(rc, &label)?);
        }

        let total_bytes = match node.find("bytes") {
            Some(bytes) => parse_value::<u64>(bytes, &label)?,
            None => 0,
        };

        if success_count.checked_add(failure_count).is_none() {
            return Err(PerfstatsError::data(
                &label,
                "fail",
                "success and failure counts overflow when added",
            ));
        }

        Ok(Group {
            label,
            success_count,
            failure_count,
            avg_response_time_secs,
            percentiles,
            http_codes,
            total_bytes,
        })
    }
}

/// Turn the loaded document into typed groups, applying `policy` to groups
/// with invalid data. Returns the report and the number of skipped groups.
pub fn extract_report(
    document: &ReportDocument,
    policy: DataErrorPolicy,
) -> Result<(Report, usize), PerfstatsError> {
    let mut report = Report::default();
    let mut skipped = 0;

    for node in &document.groups {
        match Group::from_node(node) {
            Ok(group) => report.groups.push(group),
            Err(err) => match policy {
                DataErrorPolicy::Abort => return Err(err),
                DataErrorPolicy::Skip => {
                    tracing::warn!("skipping group: {err}");
                    skipped += 1;
                }
            },
        }
    }

    Ok((report, skipped))
}

fn required_value<T>(node: &GroupNode, label: &str, field: &str) -> Result<T, PerfstatsError>
where
    T: FromStr + NumericValue,
{
    let element = node
        .find(field)
        .ok_or_else(|| PerfstatsError::data(label, field, "missing element"))?;
    parse_value(element, label)
}

fn attribute<'a>(element: &'a Element, label: &str, name: &str) -> Result<&'a str, PerfstatsError> {
    element.attr(name).ok_or_else(|| {
        PerfstatsError::data(
            label,
            describe(element, name),
            format!("missing '{name}' attribute"),
        )
    })
}

/// Parse the `value` attribute of `element`.
fn parse_value<T>(element: &Element, label: &str) -> Result<T, PerfstatsError>
where
    T: FromStr + NumericValue,
{
    let raw = attribute(element, label, "value")?;
    raw.trim()
        .parse::<T>()
        .ok()
        .filter(|v| v.is_valid())
        .ok_or_else(|| {
            PerfstatsError::data(
                label,
                describe(element, "value"),
                format!("invalid {} '{raw}'", T::KIND),
            )
        })
}

/// Field name used in errors: the element name, plus its `param` when the
/// element is keyed and the problem is with its value (e.g. `rc[500]`).
fn describe(element: &Element, attribute: &str) -> String {
    match (attribute, element.attr("param")) {
        ("param", _) | (_, None) => element.name.clone(),
        (_, Some(param)) => format!("{}[{param}]", element.name),
    }
}

trait NumericValue {
    const KIND: &'static str;
    fn is_valid(&self) -> bool;
}

impl NumericValue for u64 {
    const KIND: &'static str = "integer";
    fn is_valid(&self) -> bool {
        true
    }
}

impl NumericValue for f64 {
    const KIND: &'static str = "number";
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

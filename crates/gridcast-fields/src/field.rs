use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value, json};

use gridcast_render::formatters::DASHBOARD_BASE;
use gridcast_types::{ColumnMeta, FieldOptions};

/// One column of an admin view: what to pull off the record, how to label
/// it, and which formatter renders it.
#[derive(Debug, Clone)]
pub struct Field {
    /// Key the cell lands under in the rendered row.
    pub name: String,
    pub label: Option<String>,
    /// Registry key of the formatter for this column, if any. Columns
    /// without one pass their extracted value straight through.
    pub render_key: Option<&'static str>,
    pub read_only: bool,
    pub exclude_from_list: bool,
    pub exclude_from_edit: bool,
    pub exclude_from_create: bool,
    pub extractor: Extractor,
    /// Per-column configuration handed to the formatter.
    pub options: FieldOptions,
}

impl Field {
    /// A plain pass-through column reading the record property of the
    /// same name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let extractor = Extractor::Property(name.clone());
        Self {
            name,
            label: None,
            render_key: None,
            read_only: false,
            exclude_from_list: false,
            exclude_from_edit: false,
            exclude_from_create: false,
            extractor,
            options: FieldOptions::default(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn rendered_by(mut self, render_key: &'static str) -> Self {
        self.render_key = Some(render_key);
        self
    }

    pub fn with_extractor(mut self, extractor: Extractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn with_options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self.exclude_from_edit = true;
        self.exclude_from_create = true;
        self
    }

    pub fn hidden_from_list(mut self) -> Self {
        self.exclude_from_list = true;
        self
    }

    /// Column descriptor the formatter receives.
    pub fn column_meta(&self) -> ColumnMeta {
        let mut meta = ColumnMeta::named(&self.name);
        meta.label = self.label.clone();
        meta
    }
}

/// How a column's raw value is derived from the record before rendering.
#[derive(Debug, Clone)]
pub enum Extractor {
    /// Copy the named property as-is.
    Property(String),
    /// Element count of the named collection property.
    Count(String),
    /// The asset's small thumbnail from its by-type map.
    SmallThumbnail,
    /// The given flag pulled off every entry of the record's run list.
    RunStates(&'static str),
    /// Share of runs with the given flag set, over the record's media
    /// files, as a percentage string.
    RunPercent(&'static str),
    /// GUIDs in a batch with no corresponding run yet.
    UnstartedGuids,
    /// Run list serialized for the detail table, timestamps as RFC3339.
    RunSummaries,
    /// Dashboard URL for the record's pathspec, optionally narrowed to the
    /// current step or task.
    DashboardUrl(UrlDepth),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlDepth {
    Run,
    Step,
    Task,
}

impl Extractor {
    /// Derive the cell value. Anything missing comes back as JSON null so
    /// the formatters' absent-value handling applies.
    pub fn extract(&self, record: &Value) -> Value {
        match self {
            Extractor::Property(name) => record.get(name).cloned().unwrap_or(Value::Null),

            Extractor::Count(name) => match record.get(name).and_then(Value::as_array) {
                Some(items) => json!(items.len()),
                None => Value::Null,
            },

            Extractor::SmallThumbnail => record
                .pointer("/thumbnails_by_type/small")
                .cloned()
                .unwrap_or(Value::Null),

            Extractor::RunStates(flag) => match record.get("runs").and_then(Value::as_array) {
                Some(runs) => {
                    let states: Vec<bool> = runs
                        .iter()
                        .map(|run| run.get(*flag).and_then(Value::as_bool).unwrap_or(false))
                        .collect();
                    json!(states)
                }
                None => Value::Null,
            },

            Extractor::RunPercent(flag) => {
                let runs = record.get("runs").and_then(Value::as_array);
                let media_files = record.get("media_files").and_then(Value::as_array);
                match (runs, media_files) {
                    (Some(runs), Some(media_files))
                        if !runs.is_empty() && !media_files.is_empty() =>
                    {
                        let set = runs
                            .iter()
                            .filter(|run| run.get(*flag).and_then(Value::as_bool) == Some(true))
                            .count();
                        json!(format!(
                            "{:.1}%",
                            set as f64 * 100.0 / media_files.len() as f64
                        ))
                    }
                    _ => Value::Null,
                }
            }

            Extractor::UnstartedGuids => unstarted_guids(record),

            Extractor::RunSummaries => match record.get("runs").and_then(Value::as_array) {
                Some(runs) => Value::Array(runs.iter().map(run_summary).collect()),
                None => Value::Null,
            },

            Extractor::DashboardUrl(depth) => dashboard_url(record, *depth),
        }
    }
}

/// Media file GUIDs of a batch that no run covers yet.
fn unstarted_guids(record: &Value) -> Value {
    let Some(media_files) = record.get("media_files").and_then(Value::as_array) else {
        return Value::Null;
    };
    let started: Vec<&str> = record
        .get("runs")
        .and_then(Value::as_array)
        .map(|runs| runs.iter().filter_map(|run| run.get("guid")?.as_str()).collect())
        .unwrap_or_default();

    let unstarted: Vec<&str> = media_files
        .iter()
        .filter_map(guid_of)
        .filter(|guid| !started.contains(guid))
        .collect();
    json!(unstarted)
}

/// GUID of a media file entry in either accepted shape.
fn guid_of(entry: &Value) -> Option<&str> {
    entry.as_str().or_else(|| entry.get("guid")?.as_str())
}

/// One run, timestamps normalized for the detail table.
fn run_summary(run: &Value) -> Value {
    let mut summary: Map<String, Value> = run.as_object().cloned().unwrap_or_default();
    for key in ["created_at", "finished_at"] {
        if let Some(raw) = summary.get(key) {
            let normalized = rfc3339(raw);
            summary.insert(key.to_string(), normalized);
        }
    }
    Value::Object(summary)
}

/// Normalize a timestamp value (epoch seconds or RFC3339 string) to an
/// RFC3339 UTC string. Unparseable strings pass through untouched.
fn rfc3339(value: &Value) -> Value {
    match value {
        Value::Number(n) => n
            .as_i64()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(|dt| json!(dt.to_rfc3339_opts(SecondsFormat::Secs, true)))
            .unwrap_or(Value::Null),
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| {
                json!(
                    dt.with_timezone(&Utc)
                        .to_rfc3339_opts(SecondsFormat::Secs, true)
                )
            })
            .unwrap_or_else(|_| value.clone()),
        _ => Value::Null,
    }
}

/// Dashboard URL for a run record. A requested step or task that the
/// record does not carry yields an absent cell, not a truncated URL.
fn dashboard_url(record: &Value, depth: UrlDepth) -> Value {
    let Some(pathspec) = record.get("pathspec").and_then(Value::as_str) else {
        return Value::Null;
    };
    let mut url = format!("{}{}", DASHBOARD_BASE, pathspec);

    if matches!(depth, UrlDepth::Step | UrlDepth::Task) {
        let Some(step) = record.get("current_step").and_then(Value::as_str) else {
            return Value::Null;
        };
        url.push('/');
        url.push_str(step);
    }
    if depth == UrlDepth::Task {
        let Some(task) = record.get("current_task").and_then(Value::as_str) else {
            return Value::Null;
        };
        url.push('/');
        url.push_str(task);
    }
    json!(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_extractor() {
        let record = json!({"media_files": ["a", "b"]});
        assert_eq!(Extractor::Count("media_files".into()).extract(&record), json!(2));
        assert_eq!(Extractor::Count("media_files".into()).extract(&json!({})), Value::Null);
    }

    #[test]
    fn test_run_states_extractor() {
        let record = json!({"runs": [
            {"guid": "g1", "finished": true},
            {"guid": "g2", "finished": false},
            {"guid": "g3"},
        ]});
        assert_eq!(
            Extractor::RunStates("finished").extract(&record),
            json!([true, false, false])
        );
    }

    #[test]
    fn test_run_percent_extractor() {
        let record = json!({
            "media_files": ["g1", "g2", "g3"],
            "runs": [
                {"guid": "g1", "finished": true},
                {"guid": "g2", "finished": true},
            ],
        });
        assert_eq!(Extractor::RunPercent("finished").extract(&record), json!("66.7%"));
    }

    #[test]
    fn test_run_percent_is_absent_without_runs_or_media_files() {
        assert_eq!(
            Extractor::RunPercent("finished").extract(&json!({"media_files": ["g1"], "runs": []})),
            Value::Null
        );
        assert_eq!(
            Extractor::RunPercent("finished").extract(&json!({"runs": [{"finished": true}]})),
            Value::Null
        );
    }

    #[test]
    fn test_unstarted_guids_extractor() {
        let record = json!({
            "media_files": ["g1", {"id": 2, "guid": "g2"}, "g3"],
            "runs": [{"guid": "g2", "finished": false}],
        });
        assert_eq!(Extractor::UnstartedGuids.extract(&record), json!(["g1", "g3"]));
    }

    #[test]
    fn test_small_thumbnail_extractor() {
        let record = json!({"thumbnails_by_type": {"small": {"location": "http://x/y.png"}}});
        assert_eq!(
            Extractor::SmallThumbnail.extract(&record),
            json!({"location": "http://x/y.png"})
        );
        assert_eq!(Extractor::SmallThumbnail.extract(&json!({})), Value::Null);
    }

    #[test]
    fn test_run_summaries_normalize_timestamps() {
        let record = json!({"runs": [{
            "guid": "g1",
            "created_at": 1700000000,
            "finished_at": "2023-11-14T22:14:20+01:00",
        }]});
        let summaries = Extractor::RunSummaries.extract(&record);
        assert_eq!(
            summaries,
            json!([{
                "guid": "g1",
                "created_at": "2023-11-14T22:13:20Z",
                "finished_at": "2023-11-14T21:14:20Z",
            }])
        );
    }

    #[test]
    fn test_dashboard_url_depths() {
        let record = json!({
            "pathspec": "IngestFlow/1234",
            "current_step": "transcode",
            "current_task": "77",
        });
        assert_eq!(
            Extractor::DashboardUrl(UrlDepth::Run).extract(&record),
            json!("https://dashboard.gridcast.dev/IngestFlow/1234")
        );
        assert_eq!(
            Extractor::DashboardUrl(UrlDepth::Step).extract(&record),
            json!("https://dashboard.gridcast.dev/IngestFlow/1234/transcode")
        );
        assert_eq!(
            Extractor::DashboardUrl(UrlDepth::Task).extract(&record),
            json!("https://dashboard.gridcast.dev/IngestFlow/1234/transcode/77")
        );
    }

    #[test]
    fn test_dashboard_url_missing_component_is_absent() {
        let record = json!({"pathspec": "IngestFlow/1234"});
        assert_eq!(Extractor::DashboardUrl(UrlDepth::Step).extract(&record), Value::Null);
    }
}

//! Column sets for the admin views, one function per view.

use crate::field::{Extractor, Field, UrlDepth};

/// Collection list view: name, description, size, and GUID links.
pub fn collection_fields() -> Vec<Field> {
    vec![
        Field::new("name"),
        Field::new("description"),
        Field::new("media_file_count")
            .with_label("Size")
            .with_extractor(Extractor::Count("media_files".into()))
            .rendered_by("media_file_count")
            .read_only(),
        Field::new("media_files")
            .with_label("GUID Links")
            .rendered_by("media_file_links"),
    ]
}

/// Batch view: size and progress columns over the batch's runs.
pub fn batch_fields() -> Vec<Field> {
    vec![
        Field::new("name"),
        Field::new("description"),
        Field::new("media_file_count")
            .with_label("Size")
            .with_extractor(Extractor::Count("media_files".into()))
            .rendered_by("media_file_count")
            .read_only(),
        Field::new("media_files")
            .with_label("GUIDs")
            .rendered_by("media_file_links")
            .hidden_from_list(),
        Field::new("finished")
            .with_label("Finished")
            .with_extractor(Extractor::RunStates("finished"))
            .rendered_by("finished")
            .read_only(),
        Field::new("successful")
            .with_label("Successful")
            .with_extractor(Extractor::RunStates("successful"))
            .rendered_by("successful")
            .read_only(),
        Field::new("percent_completed")
            .with_label("Completed %")
            .with_extractor(Extractor::RunPercent("finished"))
            .read_only(),
        Field::new("percent_successful")
            .with_label("Successful %")
            .with_extractor(Extractor::RunPercent("successful"))
            .read_only(),
        Field::new("unstarted_guids")
            .with_label("Unstarted GUIDs")
            .with_extractor(Extractor::UnstartedGuids)
            .rendered_by("media_file_links")
            .read_only()
            .hidden_from_list(),
        Field::new("runs")
            .with_label("Runs")
            .with_extractor(Extractor::RunSummaries)
            .read_only()
            .hidden_from_list(),
    ]
}

/// Media file view.
pub fn media_file_fields() -> Vec<Field> {
    vec![
        Field::new("guid"),
        Field::new("collections"),
        Field::new("batches"),
    ]
}

/// Asset view with the inline thumbnail preview.
pub fn asset_fields() -> Vec<Field> {
    vec![
        Field::new("name"),
        Field::new("size"),
        Field::new("type"),
        Field::new("format"),
        Field::new("thumbnail")
            .with_label("Thumbnail")
            .with_extractor(Extractor::SmallThumbnail)
            .rendered_by("asset_thumbnail")
            .read_only(),
    ]
}

/// Run view: dashboard links at run, step, and task depth, plus the two
/// status columns.
pub fn run_fields() -> Vec<Field> {
    vec![
        Field::new("pathspec")
            .with_extractor(Extractor::DashboardUrl(UrlDepth::Run))
            .rendered_by("pathspec_link"),
        Field::new("current_step")
            .with_label("Step")
            .with_extractor(Extractor::DashboardUrl(UrlDepth::Step))
            .rendered_by("external_link"),
        Field::new("current_task")
            .with_label("Task")
            .with_extractor(Extractor::DashboardUrl(UrlDepth::Task))
            .rendered_by("external_link"),
        Field::new("finished").rendered_by("finished").read_only(),
        Field::new("successful").rendered_by("successful").read_only(),
    ]
}

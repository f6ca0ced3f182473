//! End-to-end runs from a JSON payload to rectangle geometry.

use chrono::{Duration, NaiveDate};
use takt_layout::layout::{ItemRect, TodayMarker};
use takt_layout::{
    build_grid, build_grid_with_span, tasks_from_json_str, LayoutParams, TaskItem, TaskStatus,
    TimelineGrid,
};

fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn rect_of<'a>(grid: &'a TimelineGrid, id: &str) -> &'a ItemRect {
    grid.items.iter().find(|r| r.id == id).unwrap()
}

#[test]
fn overlapping_pair_stacks_into_two_lanes() {
    let payload = r#"[
        {"id": "A", "start": "2024-01-01", "end": "2024-01-05", "zone": "Z1"},
        {"id": "B", "start": "2024-01-03", "end": "2024-01-07", "zone": "Z1"}
    ]"#;
    let report = tasks_from_json_str(payload).unwrap();
    assert_eq!(report.dropped, 0);

    let grid = build_grid(&report.items, &LayoutParams::default(), d("2024-01-04"));
    assert_eq!(grid.bands.len(), 1);
    assert_eq!(grid.bands[0].lane_count, 2);
    assert_eq!(rect_of(&grid, "A").lane, 0);
    assert_eq!(rect_of(&grid, "B").lane, 1);
}

#[test]
fn sequential_pair_shares_one_lane() {
    let payload = r#"[
        {"id": "A", "start": "2024-01-01", "end": "2024-01-05"},
        {"id": "B", "start": "2024-01-06", "end": "2024-01-10"}
    ]"#;
    let report = tasks_from_json_str(payload).unwrap();
    let grid = build_grid(&report.items, &LayoutParams::default(), d("2024-01-04"));

    assert_eq!(grid.bands[0].lane_count, 1);
    assert_eq!(rect_of(&grid, "A").lane, 0);
    assert_eq!(rect_of(&grid, "B").lane, 0);
    assert_eq!(rect_of(&grid, "A").top, rect_of(&grid, "B").top);
}

#[test]
fn malformed_record_is_dropped_and_the_rest_lay_out() {
    let payload = r#"[
        {"id": "good1", "start": "2024-01-01", "end": "2024-01-03"},
        {"id": "bad", "start": "not-a-date", "end": "2024-01-04"},
        {"id": "good2", "start": "2024-01-05", "end": "2024-01-06"}
    ]"#;
    let report = tasks_from_json_str(payload).unwrap();
    assert_eq!(report.dropped, 1);
    assert_eq!(report.items.len(), 2);

    let grid = build_grid(&report.items, &LayoutParams::default(), d("2024-01-02"));
    assert_eq!(grid.items.len(), 2);
    assert!(grid.items.iter().all(|r| r.id != "bad"));
}

#[test]
fn non_object_row_is_dropped_and_the_rest_lay_out() {
    let payload = r#"[
        {"id": "good", "start": "2024-01-01", "end": "2024-01-03"},
        42
    ]"#;
    let report = tasks_from_json_str(payload).unwrap();
    assert_eq!(report.dropped, 1);
    assert_eq!(report.items.len(), 1);
    assert_eq!(report.items[0].id, "good");
}

#[test]
fn null_fields_defer_to_later_candidates() {
    let payload = r#"[
        {"id": "n", "startDate": null, "start": "2024-01-02", "endDate": "2024-01-05", "zone": null}
    ]"#;
    let report = tasks_from_json_str(payload).unwrap();
    assert_eq!(report.dropped, 0);
    assert_eq!(report.items[0].start, d("2024-01-02"));
    assert_eq!(report.items[0].end, d("2024-01-05"));
    assert_eq!(report.items[0].group, takt_layout::model::UNASSIGNED_GROUP);
}

#[test]
fn mixed_date_shapes_normalize_to_the_same_axis() {
    let payload = r#"{"tasks": [
        {"id": "iso", "startDate": "2024-01-05T08:00:00", "endDate": "2024-01-06"},
        {"id": "us", "startDate": "01/05/2024", "endDate": "01-06-2024"},
        {"id": "epoch", "startDate": {"seconds": 1704412800}, "endDate": {"seconds": 1704499200}}
    ]}"#;
    let report = tasks_from_json_str(payload).unwrap();
    assert_eq!(report.dropped, 0);
    for item in &report.items {
        assert_eq!(item.start, d("2024-01-05"));
        assert_eq!(item.end, d("2024-01-06"));
    }

    let grid = build_grid(&report.items, &LayoutParams::default(), d("2024-01-05"));
    let left = rect_of(&grid, "iso").left;
    assert_eq!(rect_of(&grid, "us").left, left);
    assert_eq!(rect_of(&grid, "epoch").left, left);
}

#[test]
fn status_vocabulary_survives_the_pipeline() {
    let payload = r#"[
        {"id": "a", "start": "2024-01-01", "end": "2024-01-02", "status": "Completed"},
        {"id": "b", "start": "2024-01-01", "end": "2024-01-02", "state": "work in progress"}
    ]"#;
    let report = tasks_from_json_str(payload).unwrap();
    let by_id = |id: &str| report.items.iter().find(|t| t.id == id).unwrap().status;
    assert_eq!(by_id("a"), TaskStatus::Done);
    assert_eq!(by_id("b"), TaskStatus::InProgress);
}

#[test]
fn empty_payload_still_renders_a_grid_around_today() {
    let report = tasks_from_json_str("[]").unwrap();
    let params = LayoutParams::default();
    let grid = build_grid(&report.items, &params, d("2024-06-01"));

    assert_eq!(grid.span.start, d("2024-06-01"));
    assert_eq!(grid.gridlines.len(), params.min_visible_days as usize);
    assert_eq!(grid.today, TodayMarker::Visible { x: 0.0 });
    assert!(grid.total_width > 0.0);
    assert!(grid.total_height > 0.0);
}

/// Rectangles decoded back into date ranges and laid out again must land
/// exactly where they started.
#[test]
fn geometry_is_idempotent() {
    let payload = r#"[
        {"id": "a", "start": "2024-01-01", "end": "2024-01-05", "zone": "Z1"},
        {"id": "b", "start": "2024-01-03", "end": "2024-01-07", "zone": "Z1"},
        {"id": "c", "start": "2024-01-06", "end": "2024-01-06", "zone": "Z2"},
        {"id": "d", "start": "2024-01-02", "end": "2024-01-09", "zone": "Z2"}
    ]"#;
    let report = tasks_from_json_str(payload).unwrap();
    let params = LayoutParams::default();
    let today = d("2024-01-04");
    let grid = build_grid(&report.items, &params, today);

    let rebuilt: Vec<TaskItem> = grid
        .items
        .iter()
        .map(|rect| {
            let start_offset = (rect.left / params.day_width).round() as i64;
            let day_count = (rect.width / params.day_width).round() as i64;
            let start = grid.span.start + Duration::days(start_offset);
            let band = grid
                .bands
                .iter()
                .find(|b| rect.top >= b.top && rect.top < b.top + b.height)
                .unwrap();
            let mut item =
                TaskItem::new(rect.id.clone(), start, start + Duration::days(day_count - 1));
            item.group = band.group.clone();
            item
        })
        .collect();

    let again = build_grid_with_span(&rebuilt, grid.span, &params, today);
    assert_eq!(again.items, grid.items);
    assert_eq!(again.bands, grid.bands);
    assert_eq!(again.total_height, grid.total_height);
}

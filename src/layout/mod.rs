pub mod grid;
pub mod lanes;

pub use grid::{
    build_grid, build_grid_with_span, GridLine, GroupBand, ItemRect, LayoutParams, TimelineGrid,
    TodayMarker, MAX_DAY_WIDTH, MIN_DAY_WIDTH,
};
pub use lanes::{pack_by_group, pack_lanes, LanePlan};

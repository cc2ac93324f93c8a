//! Record layout description.

use anyhow::Result;
use catmull_record::constants::{
    BINORMAL_FLOAT_COUNT, DISTANCE_LUT_SIZE, RECORD_SIZE, WEIGHT_FLOAT_COUNT, WORD_SIZE, offset,
};
use serde::Serialize;

use crate::output;

/// One field of the packed record.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutField {
    pub name: &'static str,
    pub ty: &'static str,
    pub offset: usize,
    pub size: usize,
}

pub fn execute(json: bool) -> Result<()> {
    output::print_layout(&fields(), RECORD_SIZE, json);
    Ok(())
}

/// Fields in upload order.
pub fn fields() -> Vec<LayoutField> {
    vec![
        LayoutField {
            name: "point_count",
            ty: "i32",
            offset: offset::POINT_COUNT,
            size: WORD_SIZE,
        },
        LayoutField {
            name: "arc_length",
            ty: "f32",
            offset: offset::ARC_LENGTH,
            size: WORD_SIZE,
        },
        LayoutField {
            name: "weights",
            ty: "f32[72]",
            offset: offset::WEIGHTS,
            size: WEIGHT_FLOAT_COUNT * WORD_SIZE,
        },
        LayoutField {
            name: "distance_lut",
            ty: "f32[32]",
            offset: offset::DISTANCE_LUT,
            size: DISTANCE_LUT_SIZE * WORD_SIZE,
        },
        LayoutField {
            name: "binormal_lut",
            ty: "f32[48]",
            offset: offset::BINORMAL_LUT,
            size: BINORMAL_FLOAT_COUNT * WORD_SIZE,
        },
    ]
}

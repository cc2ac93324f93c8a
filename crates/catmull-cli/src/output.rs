//! Output formatting for CLI responses

use anyhow::Error;
use catmull_record::PackedSplineRecord;
use colored::*;
use serde_json::json;

use crate::commands::layout::LayoutField;
use crate::commands::pack::PackSummary;
use crate::commands::sample::CurveSample;
use crate::error::CliError;

fn print_json(value: &serde_json::Value, what: &str) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Failed to format {} as JSON: {}", what, e),
    }
}

fn vec3(v: [f32; 3]) -> String {
    format!("({:>9.4}, {:>9.4}, {:>9.4})", v[0], v[1], v[2])
}

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error_type_name(error)
        }
    });
    print_json(&error_json, "error");
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

fn error_type_name(error: &Error) -> &'static str {
    match error.downcast_ref::<CliError>() {
        Some(CliError::InvalidConfiguration(_)) => "invalid_configuration",
        Some(CliError::UnsupportedFormat(_)) => "unsupported_format",
        Some(CliError::InvalidRecord { .. }) => "invalid_record",
        Some(CliError::Spline(_)) => "spline",
        Some(CliError::IoError(_)) => "io",
        Some(CliError::JsonError(_)) => "json",
        Some(CliError::YamlError(_)) => "yaml",
        None => "unknown",
    }
}

/// Print sampled curve points
pub fn print_samples(samples: &[CurveSample], arc_length: f32, json: bool) {
    if json {
        print_json(
            &json!({
                "success": true,
                "arc_length": arc_length,
                "samples": samples
            }),
            "samples",
        );
        return;
    }

    println!(
        "{} {} samples, arc length {:.4}",
        "Curve:".bold(),
        samples.len(),
        arc_length
    );
    for sample in samples {
        let distance = sample
            .distance
            .map(|d| format!(" d={:.4}", d))
            .unwrap_or_default();
        println!(
            "  {:>4} t={:.4}{}  {}  {}",
            sample.index,
            sample.t,
            distance,
            vec3(sample.position),
            vec3(sample.binormal).dimmed()
        );
    }
}

/// Print the result of packing a record
pub fn print_pack_summary(summary: &PackSummary, json: bool) {
    if json {
        print_json(
            &json!({
                "success": true,
                "pack": summary
            }),
            "pack summary",
        );
        return;
    }

    println!("{} {}", "Wrote record:".green().bold(), summary.output);
    if let Some(basis) = &summary.basis_output {
        println!("{} {}", "Wrote root basis:".green().bold(), basis);
    }
    println!("  Point count: {}", summary.point_count);
    println!("  Segments: {}", summary.segment_count);
    if summary.truncated {
        println!(
            "  {} path has {} segments, record keeps the first {}",
            "Truncated:".yellow(),
            summary.source_segments,
            summary.segment_count
        );
    }
    println!("  Arc length: {:.4}", summary.arc_length);
    println!("  Size: {} bytes", summary.record_bytes);
}

/// Print a decoded record
pub fn print_record(record: &PackedSplineRecord, json: bool) {
    if json {
        print_json(
            &json!({
                "success": true,
                "segment_count": record.segment_count(),
                "record": record
            }),
            "record",
        );
        return;
    }

    println!("{}", "Spline Record:".bold());
    println!("  Point count: {}", record.point_count);
    println!("  Segments: {}", record.segment_count());
    println!("  Arc length: {:.4}", record.arc_length);

    for index in 0..record.segment_count() {
        if let Some(segment) = record.segment(index) {
            println!("  {} {}", "Segment".cyan(), index);
            println!("    p0 {}", vec3(segment.start.to_array()));
            println!("    m0 {}", vec3(segment.m0.to_array()));
            println!("    m1 {}", vec3(segment.m1.to_array()));
            println!("    p1 {}", vec3(segment.end.to_array()));
        }
    }

    let lut = record
        .distance_lut
        .iter()
        .map(|d| format!("{:.3}", d))
        .collect::<Vec<_>>()
        .join(" ");
    println!("  Distance LUT: {}", lut);

    println!("  Binormals:");
    let mut index = 0;
    while let Some(binormal) = record.binormal(index) {
        println!("    {:>2} {}", index, vec3(binormal.to_array()));
        index += 1;
    }
}

/// Print the record layout table
pub fn print_layout(fields: &[LayoutField], total: usize, json: bool) {
    if json {
        print_json(
            &json!({
                "success": true,
                "fields": fields,
                "total_bytes": total
            }),
            "layout",
        );
        return;
    }

    println!("{}", "Record Layout:".bold());
    println!("  {:<14} {:<9} {:>6} {:>6}", "Field", "Type", "Offset", "Size");
    for field in fields {
        println!(
            "  {:<14} {:<9} {:>6} {:>6}",
            field.name, field.ty, field.offset, field.size
        );
    }
    println!("  Total: {} bytes", total);
}

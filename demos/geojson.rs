use gps_point::{Format, Point, Unit};
use serde_json::json;
use std::env;

/// Converts a Point to a GeoJSON Feature
fn point_to_geojson_feature(point: &Point) -> serde_json::Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            // GeoJSON uses [lon, lat] order
            "coordinates": [point.longitude(), point.latitude()]
        },
        "properties": {
            "decimal_minutes": point.get(Format::DecimalMinutes),
            "degrees_minutes_seconds": point.get(Format::DegreesMinutesSeconds)
        }
    })
}

/// Converts a sequence of points to a GeoJSON LineString Feature
fn track_to_geojson_feature(points: &[Point]) -> serde_json::Value {
    let coordinates: Vec<[f64; 2]> = points
        .iter()
        .map(|pt| [pt.longitude(), pt.latitude()])
        .collect();

    let length_km: f64 = points
        .windows(2)
        .map(|pair| pair[0].distance_to(&pair[1], Unit::Kilometers))
        .sum();

    json!({
        "type": "Feature",
        "geometry": {
            "type": "LineString",
            "coordinates": coordinates
        },
        "properties": {
            "length_km": length_km
        }
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("Usage: geojson <coordinates>...");
        std::process::exit(1);
    }

    let points = args
        .iter()
        .map(|arg| arg.parse::<Point>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut features: Vec<_> = points.iter().map(point_to_geojson_feature).collect();
    if points.len() > 1 {
        features.push(track_to_geojson_feature(&points));
    }

    let collection = json!({
        "type": "FeatureCollection",
        "features": features
    });

    println!("{}", serde_json::to_string_pretty(&collection)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_feature() {
        let point: Point = "41.9,12.5".parse().unwrap();
        let feature = point_to_geojson_feature(&point);

        assert_eq!(feature["geometry"]["type"], "Point");
        assert_eq!(feature["geometry"]["coordinates"], json!([12.5, 41.9]));
        assert_eq!(feature["properties"]["decimal_minutes"], "41°0.9N,12°0.5E");
    }

    #[test]
    fn track_length() {
        let points = [
            "41.9,12.5".parse::<Point>().unwrap(),
            "48°0.858277778N,2°0.2945E".parse::<Point>().unwrap(),
        ];
        let feature = track_to_geojson_feature(&points);
        assert_eq!(feature["properties"]["length_km"], 1109.04);
    }
}

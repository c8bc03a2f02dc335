// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Speech bubble outlines as SVG.
//!
//! Places a few bubbles, drags and resizes them through `understory_bubble`,
//! and prints the resulting outlines as a standalone SVG document.
//!
//! Run:
//! - `cargo run -p understory_demos --example bubble_svg > bubbles.svg`

use kurbo::{Point, Rect};
use understory_bubble::{Body, HitParams, SpeechBubble};

fn main() {
    let bubbles = [
        // Default apex: below the body, towards the left.
        SpeechBubble::new(Point::new(40.0, 40.0), Body::new(160.0, 90.0)),
        // Dragged far to the right: pulled back to the longest allowed tail.
        SpeechBubble::new(Point::new(320.0, 40.0), Body::new(120.0, 120.0))
            .with_apex(Point::new(600.0, 20.0)),
        // Dragged into the body: pushed back out.
        SpeechBubble::new(Point::new(40.0, 300.0), Body::new(200.0, 80.0))
            .drag_apex(Point::new(0.0, 0.0), Point::new(30.0, -90.0)),
        // Resized through a flipped rectangle; the apex follows.
        SpeechBubble::new(Point::ORIGIN, Body::new(100.0, 130.0))
            .with_apex(Point::new(180.0, 180.0))
            .resize_to_rect(Rect::new(560.0, 460.0, 360.0, 300.0)),
    ];

    let bounds = bubbles
        .iter()
        .map(SpeechBubble::bounds)
        .reduce(|a, b| a.union(b))
        .unwrap_or(Rect::ZERO)
        .inflate(20.0, 20.0);

    println!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        bounds.x0,
        bounds.y0,
        bounds.width(),
        bounds.height(),
    );
    for bubble in &bubbles {
        let origin = bubble.origin();
        let outline = bubble.outline();
        let apex = outline.apex();
        println!(r#"  <g transform="translate({} {})">"#, origin.x, origin.y);
        println!(
            r#"    <path d="{}" fill="white" stroke="black" stroke-width="2"/>"#,
            outline.to_svg()
        );
        println!(
            r##"    <circle cx="{}" cy="{}" r="4" fill="#3b82f6"/>"##,
            apex.x, apex.y
        );
        println!("  </g>");

        // Local-space pick at the apex, as a host's hit test would see it.
        let hit = outline.hit_test(apex, &HitParams::default());
        eprintln!(
            "bubble at ({:.1}, {:.1}): edge {:?}, apex pick {:?}",
            origin.x,
            origin.y,
            outline.edge(),
            hit.map(|h| h.kind),
        );
    }
    println!("</svg>");
}

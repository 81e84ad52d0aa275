//! Tests for primitive SVG elements.

use super::*;

const GREY: ChartColor = ChartColor::rgb(100, 116, 139);

mod axis_tests {
    use super::*;

    #[test]
    fn horizontal_axis_renders() {
        let axis = Axis::horizontal(10.0, 100.0, 200.0, GREY).with_labels(vec![
            (0.0, "1950".to_string()),
            (0.5, "1985".to_string()),
            (1.0, "2020".to_string()),
        ]);

        let svg = axis.render();
        assert!(svg.contains("<line"));
        assert!(svg.contains(">1985</text>"));
        assert!(svg.contains("text-anchor=\"middle\""));
        assert!(svg.contains("stroke=\"#64748b\""));
    }

    #[test]
    fn vertical_axis_renders() {
        let axis = Axis::vertical(50.0, 150.0, 100.0, GREY)
            .with_labels(vec![(0.0, "0".to_string()), (1.0, "5".to_string())]);

        let svg = axis.render();
        assert!(svg.contains("<line"));
        assert!(svg.contains("text-anchor=\"end\""));
        // Top tick sits one axis length above the origin.
        assert!(svg.contains("y1=\"50\""));
    }

    #[test]
    fn axis_with_custom_font_size() {
        let axis = Axis::horizontal(0.0, 0.0, 100.0, GREY)
            .with_font_size(14.0)
            .with_labels(vec![(0.5, "mid".to_string())]);

        let svg = axis.render();
        assert!(svg.contains("font-size=\"14\""));
    }

    #[test]
    fn axis_labels_are_escaped() {
        let axis = Axis::horizontal(0.0, 0.0, 100.0, GREY)
            .with_labels(vec![(0.5, "R&B".to_string())]);
        assert!(axis.render().contains("R&amp;B"));
    }
}

mod dot_tests {
    use super::*;

    #[test]
    fn dot_renders_circle_with_title() {
        let dot = Dot {
            cx: 12.0,
            cy: 30.5,
            radius: 3.873,
            color: ChartColor::rgb(0x44, 0x01, 0x54),
            label: "1999 (#2)".to_string(),
        };

        let svg = dot.render();
        assert!(svg.contains(r##"<circle cx="12.00" cy="30.50" r="3.87" fill="#440154">"##));
        assert!(svg.contains("<title>1999 (#2)</title>"));
    }

    #[test]
    fn dot_label_is_escaped() {
        let dot = Dot {
            cx: 0.0,
            cy: 0.0,
            radius: 1.0,
            color: GREY,
            label: "<script>".to_string(),
        };
        assert!(dot.render().contains("&lt;script&gt;"));
    }
}

mod colorbar_tests {
    use super::*;

    fn colorbar(segments: Vec<ChartColor>) -> Colorbar {
        Colorbar {
            x: 700.0,
            y: 50.0,
            width: 14.0,
            height: 200.0,
            segments,
            min_label: "1".to_string(),
            max_label: "10".to_string(),
            title: "Rating".to_string(),
            text_color: GREY,
        }
    }

    #[test]
    fn renders_one_rect_per_segment() {
        let bar = colorbar(vec![
            ChartColor::rgb(0, 0, 0),
            ChartColor::rgb(128, 128, 128),
            ChartColor::rgb(255, 255, 255),
        ]);
        let svg = bar.render();
        assert_eq!(svg.matches("<rect").count(), 3);
        assert!(svg.contains(">10</text>"));
        assert!(svg.contains(">1</text>"));
        assert!(svg.contains(">Rating</text>"));
    }

    #[test]
    fn lowest_segment_is_at_bottom() {
        let bar = colorbar(vec![ChartColor::rgb(0, 0, 0), ChartColor::rgb(255, 255, 255)]);
        let svg = bar.render();
        let first = svg.lines().next().unwrap();
        // First (lowest) segment starts halfway down a 200px bar at y=50.
        assert!(first.contains("y=\"150.00\""));
        assert!(first.contains("#000000"));
    }

    #[test]
    fn empty_colorbar_renders_nothing() {
        assert!(colorbar(Vec::new()).render().is_empty());
    }
}

use motion_charts_wasm::domain::chart::{
    HoverHit, HoverState, PixelPoint, RenderState, SampleChart, Shape, nearest_within,
};

const ANCHORS: [PixelPoint; 2] = [PixelPoint { x: 10.0, y: 10.0 }, PixelPoint { x: 100.0, y: 100.0 }];

#[test]
fn pointer_near_first_point_hits_it() {
    let hit = nearest_within(&ANCHORS, PixelPoint::new(15.0, 12.0), 24.0);
    assert_eq!(hit.map(|(index, _)| index), Some(0));
}

#[test]
fn pointer_between_points_hits_nothing() {
    assert_eq!(nearest_within(&ANCHORS, PixelPoint::new(60.0, 60.0), 24.0), None);
}

#[test]
fn threshold_is_exclusive() {
    assert_eq!(nearest_within(&ANCHORS, PixelPoint::new(34.0, 10.0), 24.0), None);
    assert!(nearest_within(&ANCHORS, PixelPoint::new(33.9, 10.0), 24.0).is_some());
}

#[test]
fn hover_state_reports_only_changes() {
    let widget = SampleChart::YieldCurve.build();
    let anchors = widget.anchors();
    let mut hover = HoverState::new();

    let hit = widget.hit_test(anchors[2]);
    assert_eq!(hit.as_ref().map(|h: &HoverHit| h.index), Some(2));
    assert!(hover.on_pointer_move(hit.clone()));
    assert!(!hover.on_pointer_move(hit));
    assert_eq!(hover.tooltip().map(|t| t.label.as_str()), Some("6M"));

    assert!(hover.on_pointer_leave());
    assert!(!hover.on_pointer_leave());
    assert_eq!(hover.hovered_index(), None);
}

#[test]
fn every_sample_has_a_tooltip_per_anchor() {
    use strum::IntoEnumIterator;
    for sample in SampleChart::iter() {
        let widget = sample.build();
        for (index, anchor) in widget.anchors().into_iter().enumerate() {
            let tooltip = widget.tooltip(index);
            assert!(tooltip.is_some(), "{sample} anchor {index}");
            assert!(anchor.is_finite());
        }
    }
}

#[test]
fn hovering_yield_curve_dims_the_other_markers() {
    let widget = SampleChart::YieldCurve.build();
    let reveal = widget.reveal().into_settled();
    let scene = widget.render_static(&RenderState::new(Some(2), &reveal));
    let circles: Vec<(f64, f64)> = scene
        .shapes()
        .iter()
        .filter_map(|shape| match shape {
            Shape::Circle { radius, opacity, .. } => Some((*radius, *opacity)),
            _ => None,
        })
        .collect();

    assert_eq!(circles.len(), widget.anchors().len());
    for (index, (radius, opacity)) in circles.into_iter().enumerate() {
        if index == 2 {
            assert_eq!((radius, opacity), (5.0, 1.0));
        } else {
            assert_eq!((radius, opacity), (3.0, 0.3), "marker {index}");
        }
    }
}

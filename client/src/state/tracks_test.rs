use super::*;

#[test]
fn four_tracks_with_unique_ids() {
    let ids: Vec<u8> = TRACKS.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn no_hover_shows_default_content() {
    assert_eq!(content_for(None), DEFAULT_CONTENT);
    assert_eq!(content_for(None).emphasis, Some("pursue your passions."));
}

#[test]
fn hover_shows_track_content() {
    let content = content_for(Some(3));
    assert_eq!(content.heading, "MUN-style simulation");
}

#[test]
fn unknown_hover_falls_back_to_default() {
    assert_eq!(content_for(Some(42)), DEFAULT_CONTENT);
}

#[test]
fn panels_share_width_evenly_without_hover() {
    for track in &TRACKS {
        assert_eq!(flex_basis(track.id, None), "25%");
    }
}

#[test]
fn hovered_panel_widens_and_others_shrink() {
    assert_eq!(flex_basis(2, Some(2)), "60%");
    assert_eq!(flex_basis(1, Some(2)), "13.33%");
    assert_eq!(flex_basis(4, Some(2)), "13.33%");
}

#[test]
fn drop_delay_staggers_by_index() {
    assert_eq!(drop_delay_ms(0), 0);
    assert_eq!(drop_delay_ms(3), 300);
}

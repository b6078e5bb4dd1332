use super::*;
use crate::config::PlaybackSettings;
use crate::error::PlaylistError;
use crate::library::Track;
use crate::sort::SortPolicy;

fn t(id: &str, name: &str) -> Track {
    Track::new(id, name)
}

fn numbered(n: usize) -> Vec<Track> {
    (1..=n)
        .map(|i| Track::new(format!("uri:{i}"), format!("clip{i}.mp4")))
        .collect()
}

fn names(playlist: &Playlist) -> Vec<String> {
    playlist
        .ordered_tracks()
        .iter()
        .map(|t| t.name.clone())
        .collect()
}

fn reversing() -> Playlist {
    Playlist::new(SortPolicy::Natural).with_shuffler(|tracks: &mut [Track]| tracks.reverse())
}

#[test]
fn new_playlist_is_empty() {
    let p = Playlist::default();
    assert_eq!(p.state(), PlaylistState::Empty);
    assert_eq!(p.len(), 0);
    assert_eq!(p.current_index(), 0);
    assert!(p.current_track().is_none());
    assert_eq!(p.status().to_string(), "0/0");
}

#[test]
fn load_sorts_by_policy_and_resets_index() {
    let mut p = Playlist::new(SortPolicy::Natural);
    p.load(
        vec![t("b", "video2.mp4"), t("c", "video10.mp4"), t("a", "video1.mp4")],
        SortPolicy::Natural,
    )
    .unwrap();

    assert_eq!(p.state(), PlaylistState::Loaded);
    assert_eq!(names(&p), ["video1.mp4", "video2.mp4", "video10.mp4"]);
    assert_eq!(p.current_index(), 0);
    assert_eq!(p.current_track().map(|t| t.id.as_str()), Some("a"));

    p.seek(3).unwrap();
    p.load(numbered(2), SortPolicy::Natural).unwrap();
    assert_eq!(p.current_index(), 0);
    assert_eq!(p.len(), 2);
}

#[test]
fn load_uses_locale_collator_when_asked() {
    let mut p = Playlist::new(SortPolicy::Locale);
    p.load(
        vec![t("1", "file2.txt"), t("2", "file10.txt")],
        SortPolicy::Locale,
    )
    .unwrap();
    assert_eq!(names(&p), ["file10.txt", "file2.txt"]);
    assert_eq!(p.policy(), SortPolicy::Locale);

    let mut custom = Playlist::new(SortPolicy::Locale).with_collator(|a: &str, b: &str| b.cmp(a));
    custom
        .load(vec![t("1", "a"), t("2", "c"), t("3", "b")], SortPolicy::Locale)
        .unwrap();
    assert_eq!(names(&custom), ["c", "b", "a"]);
}

#[test]
fn load_empty_reports_empty_input_and_clears() {
    let mut p = Playlist::new(SortPolicy::Natural);
    p.load(numbered(3), SortPolicy::Natural).unwrap();
    p.seek(2).unwrap();

    assert_eq!(p.load(Vec::new(), SortPolicy::Natural), Err(PlaylistError::EmptyInput));
    assert_eq!(p.state(), PlaylistState::Empty);
    assert_eq!(p.current_index(), 0);
    assert!(p.ordered_tracks().is_empty());
}

#[test]
fn load_never_shuffles_but_keeps_flag() {
    let mut p = reversing();
    p.load(numbered(3), SortPolicy::Natural).unwrap();
    p.set_shuffle(true);
    assert_eq!(names(&p), ["clip3.mp4", "clip2.mp4", "clip1.mp4"]);

    p.load(numbered(3), SortPolicy::Natural).unwrap();
    assert!(p.is_shuffled());
    assert_eq!(names(&p), ["clip1.mp4", "clip2.mp4", "clip3.mp4"]);
}

#[test]
fn shuffle_on_permutes_and_restarts_at_top() {
    let mut p = reversing();
    p.load(numbered(4), SortPolicy::Natural).unwrap();
    p.seek(3).unwrap();

    p.set_shuffle(true);
    assert!(p.is_shuffled());
    assert_eq!(p.current_index(), 0);
    assert_eq!(names(&p), ["clip4.mp4", "clip3.mp4", "clip2.mp4", "clip1.mp4"]);
}

#[test]
fn shuffle_on_twice_is_idempotent() {
    let mut p = Playlist::new(SortPolicy::Natural).with_shuffler(RandomShuffler::seeded(7));
    p.load(numbered(20), SortPolicy::Natural).unwrap();

    p.set_shuffle(true);
    let first = names(&p);
    p.seek(5).unwrap();
    p.set_shuffle(true);

    assert_eq!(names(&p), first);
    assert_eq!(p.current_index(), 4);
}

#[test]
fn shuffle_off_restores_load_order() {
    let mut p = Playlist::new(SortPolicy::Natural).with_shuffler(RandomShuffler::seeded(42));
    p.load(
        vec![
            t("x", "b10.mkv"),
            t("y", "B2.mkv"),
            t("z", "a.mkv"),
            t("w", "b2.mkv"),
            t("v", "b2.mkv"),
        ],
        SortPolicy::Natural,
    )
    .unwrap();
    let loaded = p.ordered_tracks().to_vec();

    p.set_shuffle(true);
    p.seek(4).unwrap();
    p.set_shuffle(false);

    assert!(!p.is_shuffled());
    assert_eq!(p.ordered_tracks(), loaded.as_slice());
    assert_eq!(p.current_index(), 0);
}

#[test]
fn toggle_shuffle_flips_between_orders() {
    let mut p = reversing();
    p.load(numbered(3), SortPolicy::Natural).unwrap();

    p.toggle_shuffle();
    assert!(p.is_shuffled());
    assert_eq!(names(&p)[0], "clip3.mp4");

    p.toggle_shuffle();
    assert!(!p.is_shuffled());
    assert_eq!(names(&p)[0], "clip1.mp4");
}

#[test]
fn shuffle_on_empty_playlist_is_noop() {
    let mut p = reversing();
    p.set_shuffle(true);
    assert!(!p.is_shuffled());
    assert_eq!(p.state(), PlaylistState::Empty);
}

#[test]
fn loop_flag_does_not_touch_order_or_index() {
    let mut p = Playlist::new(SortPolicy::Natural);
    p.set_loop(true);
    assert!(p.is_looping());

    p.load(numbered(3), SortPolicy::Natural).unwrap();
    p.seek(2).unwrap();
    let before = names(&p);

    p.toggle_loop();
    assert!(!p.is_looping());
    assert_eq!(names(&p), before);
    assert_eq!(p.current_index(), 1);
}

#[test]
fn seek_accepts_bounds_and_rejects_outside() {
    let mut p = Playlist::new(SortPolicy::Natural);
    p.load(numbered(5), SortPolicy::Natural).unwrap();

    p.seek(1).unwrap();
    assert_eq!(p.current_index(), 0);
    p.seek(5).unwrap();
    assert_eq!(p.current_index(), 4);

    assert_eq!(
        p.seek(0),
        Err(PlaylistError::IndexOutOfRange { requested: 0, len: 5 })
    );
    assert_eq!(p.current_index(), 4);
    assert_eq!(
        p.seek(6),
        Err(PlaylistError::IndexOutOfRange { requested: 6, len: 5 })
    );
    assert_eq!(p.current_index(), 4);
}

#[test]
fn seek_on_empty_is_noop() {
    let mut p = Playlist::new(SortPolicy::Natural);
    assert_eq!(p.seek(3), Ok(()));
    assert_eq!(p.current_index(), 0);
}

#[test]
fn goto_parses_typed_position() {
    let mut p = Playlist::new(SortPolicy::Natural);
    p.load(numbered(5), SortPolicy::Natural).unwrap();

    p.goto(" 3 ").unwrap();
    assert_eq!(p.current_index(), 2);

    assert_eq!(p.goto("abc"), Err(PlaylistError::InvalidInput("abc".into())));
    assert_eq!(p.goto("-1"), Err(PlaylistError::InvalidInput("-1".into())));
    assert!(matches!(p.goto("9"), Err(PlaylistError::IndexOutOfRange { .. })));
    assert_eq!(p.current_index(), 2);
}

#[test]
fn advance_wraps_when_looping() {
    let mut p = Playlist::new(SortPolicy::Natural);
    p.load(numbered(3), SortPolicy::Natural).unwrap();
    p.set_loop(true);
    p.seek(3).unwrap();

    p.advance().unwrap();
    assert_eq!(p.current_index(), 0);
}

#[test]
fn advance_reports_end_without_loop() {
    let mut p = Playlist::new(SortPolicy::Natural);
    p.load(numbered(3), SortPolicy::Natural).unwrap();

    p.advance().unwrap();
    assert_eq!(p.current_index(), 1);
    p.seek(3).unwrap();

    assert_eq!(p.advance(), Err(PlaylistError::EndOfPlaylist));
    assert_eq!(p.current_index(), 2);
}

#[test]
fn retreat_wraps_only_when_looping() {
    let mut p = Playlist::new(SortPolicy::Natural);
    p.load(numbered(3), SortPolicy::Natural).unwrap();

    p.retreat();
    assert_eq!(p.current_index(), 0);

    p.set_loop(true);
    p.retreat();
    assert_eq!(p.current_index(), 2);
    p.retreat();
    assert_eq!(p.current_index(), 1);
}

#[test]
fn advance_and_retreat_on_empty_do_nothing() {
    let mut p = Playlist::new(SortPolicy::Natural);
    assert_eq!(p.advance(), Ok(()));
    p.retreat();
    assert_eq!(p.current_index(), 0);
}

#[test]
fn rewind_returns_to_first_track() {
    let mut p = reversing();
    p.load(numbered(4), SortPolicy::Natural).unwrap();
    p.set_shuffle(true);
    p.seek(4).unwrap();

    p.rewind();
    assert_eq!(p.current_index(), 0);
    assert!(p.is_shuffled());
    assert_eq!(names(&p)[0], "clip4.mp4");
}

#[test]
fn status_reports_counter_and_flags() {
    let mut p = Playlist::new(SortPolicy::Natural);
    p.load(numbered(12), SortPolicy::Natural).unwrap();
    p.seek(4).unwrap();
    p.set_loop(true);

    let status = p.status();
    assert_eq!(
        status,
        PlaylistStatus {
            current: 4,
            total: 12,
            looping: true,
            shuffled: false,
        }
    );
    assert_eq!(status.to_string(), "4/12");
    assert_eq!(status.info_line(), "12 files | loop: ON | shuffle: OFF");
}

#[test]
fn from_settings_applies_policy_and_loop() {
    let settings = PlaybackSettings {
        sort_policy: SortPolicy::Locale,
        locale: None,
        looping: true,
        shuffle: true,
    };
    let p = Playlist::from_settings(&settings);
    assert_eq!(p.policy(), SortPolicy::Locale);
    assert!(p.is_looping());
    assert!(!p.is_shuffled());
}

#[test]
fn apply_playback_defaults_shuffles_loaded_playlist() {
    let settings = PlaybackSettings {
        sort_policy: SortPolicy::Natural,
        locale: None,
        looping: false,
        shuffle: true,
    };
    let mut p = Playlist::from_settings(&settings)
        .with_shuffler(|tracks: &mut [Track]| tracks.reverse());
    p.load(numbered(3), settings.sort_policy).unwrap();
    p.apply_playback_defaults(&settings);

    assert!(p.is_shuffled());
    assert_eq!(names(&p)[0], "clip3.mp4");
    assert_eq!(p.current_index(), 0);
}

#[test]
fn locale_default_collates_accented_names_beside_base_letters() {
    let mut p = Playlist::new(SortPolicy::Locale);
    p.load(
        vec![
            t("1", "zebra.mp4"),
            t("2", "élan.mp4"),
            t("3", "ćwiczenie.mp4"),
            t("4", "dom.mp4"),
            t("5", "apple.mp4"),
        ],
        SortPolicy::Locale,
    )
    .unwrap();

    assert_eq!(
        names(&p),
        ["apple.mp4", "ćwiczenie.mp4", "dom.mp4", "élan.mp4", "zebra.mp4"]
    );
}

#[test]
fn from_settings_uses_configured_collation_locale() {
    let settings = PlaybackSettings {
        sort_policy: SortPolicy::Locale,
        locale: Some("pl".into()),
        ..PlaybackSettings::default()
    };
    let mut p = Playlist::from_settings(&settings);
    p.load(
        vec![t("1", "dom.mp4"), t("2", "ćma.mp4"), t("3", "cyrk.mp4")],
        SortPolicy::Locale,
    )
    .unwrap();

    // Polish tailoring files ć as its own letter after c.
    assert_eq!(names(&p), ["cyrk.mp4", "ćma.mp4", "dom.mp4"]);
}

#[test]
fn status_keeps_shuffle_flag_after_reload() {
    let mut p = reversing();
    p.load(numbered(3), SortPolicy::Natural).unwrap();
    p.set_shuffle(true);
    p.load(numbered(2), SortPolicy::Natural).unwrap();

    let status = p.status();
    assert!(status.shuffled);
    assert_eq!(status.info_line(), "2 files | loop: OFF | shuffle: ON");
    assert_eq!(names(&p), ["clip1.mp4", "clip2.mp4"]);
}

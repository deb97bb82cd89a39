use super::recognize;

#[test]
fn recognition_corpus() {
    // (title, expected (offset, raw))
    let cases: Vec<(&str, Option<(&str, &str)>)> = vec![
        ("Starts at 01:22:35", Some(("1h22m35s", "01:22:35"))),
        ("Cool thing at 12:34", Some(("12m34s", "12:34"))),
        ("23:34 cool thing", Some(("23m34s", "23:34"))),
        ("The dude at 2:32. Same bro!", Some(("2m32s", "2:32"))),
        ("Starting at like 3:14, this guy says dumb stuff.", Some(("3m14s", "3:14"))),
        ("The dude at 2:32.Not a timestamp", None),
        ("Starting at like 3:14,12 not a timestamp", None),
        ("bad time 00:61", None),
        ("bad time 60:51", None),
        ("bad time 25:50:51", None),
        ("days not supported yet 2:21:50:51", None),
        ("[23:34] cool thing", None),
        ("23:34] cool thing", None),
        ("[23:34 cool thing", None),
        ("Cool thing at 60:34", None),
        // Minutes run to 59; this is 24 minutes, not a 24th hour.
        ("Cool thing around 24:34", Some(("24m34s", "24:34"))),
        ("Cool thing around 24:64", None),
        ("Not a time [34m]", None),
        ("This has no numbers in it", None),
        ("This has numbers that don't look like time 123.456", None),
        ("Around 12 seconds something happens", None),
        ("Documentary at 01:12:34", Some(("1h12m34s", "01:12:34"))),
        ("r/hololive (Sep 22 @ 21:00JST)", None),
        ("Documentary [00:12:34]", None),
        ("Alexander Mercouris | 22:30", Some(("22m30s", "22:30"))),
        // excluded prefixes
        ("1:20 scale", None),
        ("beaten in under 3:00", None),
        ("finished in less than 3:00", None),
        ("done in 3:00", None),
        ("first sub 3:00 lap", None),
        ("episode 2:01", None),
        ("live 3:00", None),
        ("live at 3:00", None),
        ("live in 3:00", None),
        ("broke 3:00 record", None),
        ("broke the 3:00 barrier", None),
        // excluded suffixes
        ("thing at 3:00 live", None),
        ("thing at 3:00 pm", None),
        ("thing at 3:00 PM", None),
        ("thing at 3:00 am", None),
        ("thing at 3:00 midday", None),
        ("thing at 3:00 jst", None),
        ("thing at 3:00 EST", None),
        // no separating space before the timezone
        ("thing at 3:00PST", None),
        // timezone full-name first word
        ("thing at 3:00 Eastern", None),
    ];

    for (title, expected) in cases {
        let found = recognize(title).unwrap();
        let found = found.as_ref().map(|t| (t.offset.as_str(), t.raw.as_str()));
        assert_eq!(found, expected, "title {title:?}");
    }
}

#[test]
fn zero_offsets_are_not_actionable() {
    assert_eq!(recognize("kicks in at 0:00").unwrap(), None);
    assert_eq!(recognize("countdown from 00:00").unwrap(), None);
    assert_eq!(recognize("0:00:00 exactly").unwrap(), None);
}

#[test]
fn titles_without_clock_patterns_never_match() {
    for title in ["", "plain words only", "scores 10-3 and 7-0", "v2.4.7 changelog", "a:b:c:d"] {
        assert_eq!(recognize(title).unwrap(), None, "title {title:?}");
    }
}

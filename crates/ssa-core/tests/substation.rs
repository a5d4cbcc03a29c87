//! End-to-end tests for reading and writing SubStation scripts.
//!
//! Each test drives the public API from text to [`Document`] and back, using
//! reference scripts in both the v4.00+ and the legacy v4.00 dialect.

use ssa_core::{
    ast::{color_to_ass_rgba, color_to_ssa_rgb, rgba_to_color, Alignment, Color, Event, EventType, Style},
    parser::{IssueCategory, IssueSeverity},
    time::{make_time, MakeTime},
    writer::{ms_to_timestamp, WriteOptions, MAX_REPRESENTABLE_TIME},
    CoreError, Document, ScriptVersion,
};

const SIMPLE_ASS_REF: &str = r"[Script Info]
; Script generated by ssa-core
WrapStyle: 0
ScaledBorderAndShadow: yes
Collisions: Normal
My Custom Info: Some: Test, String.
ScriptType: v4.00+

[V4+ Styles]
Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding
Style: Default,Arial,20.0,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100.0,100.0,0.0,0.0,1,2.0,2.0,2,10,10,10,1
Style: topleft,Arial,20.0,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,-1,0,0,0,100.0,100.0,0.0,0.0,1,2.0,2.0,7,10,10,10,1
Style: left,Arial,20.0,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100.0,100.0,0.0,0.0,1,2.0,2.0,4,10,10,10,1

[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
Dialogue: 0,0:00:00.00,0:01:00.00,Default,,0,0,0,,An, example, subtitle.
Comment: 0,0:00:00.00,0:01:00.00,Default,,0,0,0,,You can't see this one.
Dialogue: 0,0:01:00.00,0:02:00.00,Default,,0,0,0,,Subtitle number\Ntwo.
";

const SIMPLE_SSA_REF: &str = r"[Script Info]
; Script generated by ssa-core
WrapStyle: 0
ScaledBorderAndShadow: yes
Collisions: Normal
My Custom Info: Some: Test, String.
ScriptType: v4.00

[V4 Styles]
Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, TertiaryColour, BackColour, Bold, Italic, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, AlphaLevel, Encoding
Style: Default,Arial,20.0,16777215,255,0,0,0,0,1,2.0,2.0,2,10,10,10,0,1
Style: topleft,Arial,20.0,16777215,255,0,0,-1,0,1,2.0,2.0,5,10,10,10,0,1
Style: left,Arial,20.0,16777215,255,0,0,0,0,1,2.0,2.0,9,10,10,10,0,1

[Events]
Format: Marked, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
Dialogue: Marked=0,0:00:00.00,0:01:00.00,Default,,0,0,0,,An, example, subtitle.
Comment: Marked=0,0:00:00.00,0:01:00.00,Default,,0,0,0,,You can't see this one.
Dialogue: Marked=0,0:01:00.00,0:02:00.00,Default,,0,0,0,,Subtitle number\Ntwo.
";

const AEGISUB_PROJECT_GARBAGE_FILE: &str = "[Script Info]
; Script generated by Aegisub 3.2.2
; http://www.aegisub.org/
Title: Default Aegisub file
ScriptType: v4.00+
WrapStyle: 0
ScaledBorderAndShadow: yes
YCbCr Matrix: None
PlayResX: 640
PlayResY: 480

[Aegisub Project Garbage]
Last Style Storage: Default
Video File: ?dummy:23.976000:40000:640:480:47:163:254:
Video AR Value: 1.333333
Video Zoom Percent: 0.500000
Active Line: 2

[V4+ Styles]
Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding
Style: Default,Arial,20,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,2,2,2,10,10,10,1

[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
Dialogue: 0,0:00:00.00,0:00:05.00,Default,,0,0,0,,Test for new Aegisub Project section
";

const AEGISUB_PROJECT_GARBAGE_FILE_WITHOUT_SPACE_AFTER_COLON: &str = "[Script Info]
; Script generated by Aegisub 3.2.2
; http://www.aegisub.org/
Title:Default Aegisub file
ScriptType:v4.00+
WrapStyle:0
ScaledBorderAndShadow:yes
YCbCr Matrix:None
PlayResX:640
PlayResY:480

[Aegisub Project Garbage]
Last Style Storage:Default
Video File:?dummy:23.976000:40000:640:480:47:163:254:
Video AR Value:1.333333
Video Zoom Percent:0.500000
Active Line:2

[V4+ Styles]
Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding
Style: Default,Arial,20,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,2,2,2,10,10,10,1

[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
Dialogue: 0,0:00:00.00,0:00:05.00,Default,,0,0,0,,Test for new Aegisub Project section
";

const HEX_COLOR_IN_SSA: &str = "[Script Info]
;SrtEdit 6.3.2012.1001
;Copyright(C) 2005-2012 Yuan Weiguo

Title:
Original Script:
ScriptType: v4.00
Collisions: Normal
PlayResX: 640
PlayResY: 480
Timer: 100.0000
WrapStyle: 0
ScaledBorderAndShadow: no

[V4 Styles]
Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, TertiaryColour, BackColour, Bold, Italic, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, AlphaLevel, Encoding
Style: Default,SimHei,30,&HFFFFFF,&H00FFFF,&H000000,&H000000,-1,0,1,2,3,2,20,20,20,0,1

[Events]
Format: Marked, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
Dialogue: Marked=0,0:01:30.30,0:01:35.30,Default,NTP,0000,0000,0000,!Effect,-脫逃-
";

const ASS_WITH_MALFORMED_STYLE: &str = "[Script Info]
Title: file
Original Script: <unknown>
ScriptType: v4.00+
Collisions: Normal
PlayResX: 384
PlayResY: 288
Timer: 100.0
WrapStyle: 0
Audio File: file.ogg

[v4+ Styles]
Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding
Style: Default, Arial, 20, &H00FFFFFF, &H00000000, &H00000000, &H00000000, 0, 0, 0, 0, 100, 100, 0, 0, 1, 2, 0, 2, 15, 15, 15, 0

[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
Dialogue: 0,0:00:00.00,0:00:01.10,Default,Иные 0,0000,0000,0000,,Hello
";

const ASS_WITH_INVALID_ALIGNMENT: &str = "[Script Info]
Title: file
ScriptType: v4.00+

[v4+ Styles]
Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding
Style: Default,Arial,20.0,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100.0,100.0,0.0,0.0,1,2.0,2.0,123,10,10,10,1

[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
Dialogue: 0,0:00:00.00,0:00:01.10,Default,Иные 0,0000,0000,0000,,Hello
";

const ASS_WITHOUT_FRACTIONS_OF_SECOND: &str = "[Script Info]
ScriptType: v4.00+

[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
Dialogue: 0,-1:59:54.93,0:01:00.00,Default,,0,0,0,,Negative timestamp line.
Dialogue: 0,0:00:23.45,0:01:23.45,Default,,0,0,0,,Correct timestamp line.
Dialogue: 0,0:00:23,0:01:23,Default,,0,0,0,,Timestamp with missing fractions line.
";

const ASS_WITH_SHORT_MINUTES_SECONDS: &str = r"[Script Info]
Title: karaoke
ScriptType: v4.00+

[V4+ Styles]
Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding
Style: Default,Arial,20,&H00FFFFFF,&H000088EF,&H00000000,&H00666666,-1,0,0,0,100,100,0,0,1,3,0,8,10,10,10,1

[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text

Dialogue: 1,0:0:0.04,0:0:4.00,Default,,0000,0000,0000,,{\k100}{\k33}SUN{\k4}{\k42}DAY
Dialogue: 1,0:0:3.42,0:0:7.88,Default,,0000,0000,0000,,{\k100}{\k4}me{\k4}{\k8}ku
";

fn clock(h: f64, m: f64, s: f64, ms: f64) -> i64 {
    make_time(MakeTime {
        h,
        m,
        s,
        ms,
        ..MakeTime::default()
    })
    .unwrap()
}

fn minutes(m: f64) -> i64 {
    clock(0.0, m, 0.0, 0.0)
}

fn build_ref() -> Document {
    let mut doc = Document::default();
    doc.info
        .insert("My Custom Info".to_string(), "Some: Test, String.".to_string());
    doc.styles.insert(
        "topleft".to_string(),
        Style {
            alignment: Alignment::TopLeft,
            bold: true,
            ..Style::default()
        },
    );
    doc.styles.insert(
        "left".to_string(),
        Style {
            alignment: Alignment::MiddleLeft,
            ..Style::default()
        },
    );
    doc.push(Event {
        start: 0,
        end: minutes(1.0),
        text: "An, example, subtitle.".to_string(),
        ..Event::default()
    });
    doc.push(Event {
        event_type: EventType::Comment,
        start: 0,
        end: minutes(1.0),
        text: "You can't see this one.".to_string(),
        ..Event::default()
    });
    doc.push(Event {
        start: minutes(1.0),
        end: minutes(2.0),
        text: r"Subtitle number\Ntwo.".to_string(),
        ..Event::default()
    });
    doc
}

/// Route issue logs to the test output; set `RUST_LOG=ssa_core=debug` to see them
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn write(doc: &Document, version: ScriptVersion) -> String {
    doc.to_substation(&WriteOptions::for_version(version))
        .unwrap()
        .value
}

fn read(text: &str) -> Document {
    Document::from_string(text).unwrap().value
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Both dialects are written field for field
    #[test]
    fn test_simple_write() {
        let doc = build_ref();
        assert_eq!(write(&doc, ScriptVersion::AssV4), SIMPLE_ASS_REF);
        assert_eq!(write(&doc, ScriptVersion::SsaV4), SIMPLE_SSA_REF);
    }

    /// Reading either dialect yields the same document
    #[test]
    fn test_simple_read() {
        let reference = build_ref();

        let ass = Document::from_string(SIMPLE_ASS_REF).unwrap();
        assert_eq!(ass.version, ScriptVersion::AssV4);
        assert!(ass.issues.is_empty(), "{:?}", ass.issues);
        assert!(reference.equals(&ass.value));

        let ssa = Document::from_string(SIMPLE_SSA_REF).unwrap();
        assert_eq!(ssa.version, ScriptVersion::SsaV4);
        assert!(ssa.issues.is_empty(), "{:?}", ssa.issues);
        assert!(reference.equals(&ssa.value));
    }

    /// Colors survive both encodings
    #[test]
    fn test_color_parsing() {
        let solid = Color::new(1, 2, 3);
        let transparent = Color::with_alpha(1, 2, 3, 4);

        assert_eq!(rgba_to_color(&color_to_ssa_rgb(solid).to_string()).unwrap(), solid);
        assert_eq!(rgba_to_color(&color_to_ass_rgba(solid)).unwrap(), solid);
        assert_eq!(rgba_to_color(&color_to_ass_rgba(transparent)).unwrap(), transparent);

        let color = Color::with_alpha(0xDD, 0xCC, 0xBB, 0xAA);
        assert_eq!(rgba_to_color("&HAABBCCDD").unwrap(), color);
        assert_eq!(color_to_ass_rgba(color), "&HAABBCCDD");
    }

    /// The Aegisub project section is kept verbatim
    #[test]
    fn test_aegisub_project_garbage() {
        let doc = read(AEGISUB_PROJECT_GARBAGE_FILE);
        let garbage_section = "
[Aegisub Project Garbage]
Last Style Storage: Default
Video File: ?dummy:23.976000:40000:640:480:47:163:254:
Video AR Value: 1.333333
Video Zoom Percent: 0.500000
Active Line: 2
";
        assert!(write(&doc, ScriptVersion::AssV4).contains(garbage_section));
    }

    /// Metadata pairs do not need a space after the colon
    #[test]
    fn test_no_space_after_colon_in_metadata_section() {
        let reference = read(AEGISUB_PROJECT_GARBAGE_FILE);
        let doc = read(AEGISUB_PROJECT_GARBAGE_FILE_WITHOUT_SPACE_AFTER_COLON);

        assert!(reference.equals(&doc));
        assert_eq!(reference.aegisub_project, doc.aegisub_project);
    }

    /// Negative times are read exactly and written as zero
    #[test]
    fn test_negative_timestamp_read() {
        let reference = build_ref();
        let mut doc = read(SIMPLE_ASS_REF);
        assert_eq!(doc.events[0].start, 0);

        let text = SIMPLE_ASS_REF.replacen("Dialogue: 0,0:00:00.00", "Dialogue: 0,-1:59:54.93", 1);
        doc = read(&text);
        assert_eq!(doc.events[0].start, -clock(1.0, 59.0, 54.0, 930.0));

        let out = doc
            .to_substation(&WriteOptions::default())
            .unwrap();
        assert!(out.issues.is_empty());
        assert_eq!(out.value, write(&reference, ScriptVersion::AssV4));
    }

    /// Times past 9:59:59.99 are clamped with a warning
    #[test]
    fn test_overflow_timestamp_write() {
        init_tracing();
        let mut reference = build_ref();
        reference.events[0].end = clock(1000.0, 0.0, 0.0, 0.0);

        let out = reference.to_substation(&WriteOptions::default()).unwrap();
        assert_eq!(out.issues.len(), 1);
        let issue = &out.issues[0];
        assert_eq!(issue.severity, IssueSeverity::Warning);
        assert_eq!(issue.category, IssueCategory::Timing);
        assert!(out.value.lines().nth(issue.line - 1).unwrap().contains("9:59:59.99"));

        let doc = read(&out.value);
        assert_eq!(doc.events[0].end, MAX_REPRESENTABLE_TIME);
        // the stored value is untouched
        assert_eq!(reference.events[0].end, 3_600_000_000);
    }

    /// Writing rounds to centiseconds, half up
    #[test]
    fn test_centisecond_rounding() {
        let mut reference = Document::default();
        reference.push(Event {
            start: clock(1.0, 1.0, 0.0, 4.0),
            end: clock(1.0, 1.0, 0.0, 5.0),
            ..Event::default()
        });

        let doc = read(&write(&reference, ScriptVersion::AssV4));
        assert_eq!(doc.events[0].start, clock(1.0, 1.0, 0.0, 0.0));
        assert_eq!(doc.events[0].end, clock(1.0, 1.0, 0.0, 10.0));
    }

    /// Legacy scripts may still spell colors in hex
    #[test]
    fn test_hex_color_in_ssa() {
        let parsed = Document::from_string(HEX_COLOR_IN_SSA).unwrap();
        assert_eq!(parsed.version, ScriptVersion::SsaV4);

        let style = &parsed.value.styles["Default"];
        assert_eq!(style.primary_color, Color::new(0xFF, 0xFF, 0xFF));
        assert_eq!(style.secondary_color, Color::new(0xFF, 0xFF, 0x00));
        assert_eq!(style.shadow, 3.0);

        let event = &parsed.value.events[0];
        assert_eq!(event.name, "NTP");
        assert_eq!(event.effect, "!Effect");
        assert_eq!(event.text, "-脫逃-");
        assert_eq!(event.start, clock(0.0, 1.0, 30.0, 300.0));
    }

    /// Spaces around style fields and a lower-case section name are tolerated
    #[test]
    fn test_ass_with_malformed_style() {
        let doc = read(ASS_WITH_MALFORMED_STYLE);
        assert_eq!(doc.events[0].text, "Hello");
        assert_eq!(doc.events[0].name, "Иные 0");

        let style = &doc.styles["Default"];
        assert_eq!(style.fontname, "Arial");
        assert_eq!(style.margin_l, 15);
        assert_eq!(style.encoding, 0);
    }

    /// Timestamps without a fractional part read as whole seconds
    #[test]
    fn test_ass_with_missing_fractions_in_timestamp() {
        let doc = read(ASS_WITHOUT_FRACTIONS_OF_SECOND);

        assert_eq!(doc.events[0].start, -clock(1.0, 59.0, 54.0, 930.0));
        assert_eq!(doc.events[0].end, clock(0.0, 1.0, 0.0, 0.0));

        assert_eq!(doc.events[1].start, clock(0.0, 0.0, 23.0, 450.0));
        assert_eq!(doc.events[1].end, clock(0.0, 1.0, 23.0, 450.0));

        assert_eq!(doc.events[2].start, clock(0.0, 0.0, 23.0, 0.0));
        assert_eq!(doc.events[2].end, clock(0.0, 1.0, 23.0, 0.0));
    }

    /// Single digit minutes and seconds are accepted
    #[test]
    fn test_ass_with_short_minutes_seconds_in_timestamp() {
        let doc = read(ASS_WITH_SHORT_MINUTES_SECONDS);

        assert_eq!(doc.events[0].start, clock(0.0, 0.0, 0.0, 40.0));
        assert_eq!(doc.events[0].end, clock(0.0, 0.0, 4.0, 0.0));

        assert_eq!(doc.events[1].start, clock(0.0, 0.0, 3.0, 420.0));
        assert_eq!(doc.events[1].end, clock(0.0, 0.0, 7.0, 880.0));
        assert_eq!(doc.events[1].layer, 1);
    }

    /// An alignment code valid in neither scheme falls back to bottom-center
    #[test]
    fn test_reading_invalid_alignment_raises_warning() {
        init_tracing();
        let parsed = Document::from_string(ASS_WITH_INVALID_ALIGNMENT).unwrap();
        assert_eq!(parsed.value.styles["Default"].alignment, Alignment::BottomCenter);

        let warnings: Vec<_> = parsed
            .issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Warning)
            .collect();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("123"), "{}", warnings[0].message);
        assert_eq!(warnings[0].line, 7);
    }

    /// Rounding happens before formatting, carrying into the next second
    #[test]
    fn test_ms_to_timestamp() {
        for ms in 4_659_990..=4_659_994 {
            assert_eq!(ms_to_timestamp(ms), "1:17:39.99");
        }
        for ms in 4_659_995..=4_659_999 {
            assert_eq!(ms_to_timestamp(ms), "1:17:40.00");
        }
        assert_eq!(ms_to_timestamp(-1), "0:00:00.00");
        assert_eq!(ms_to_timestamp(i64::MAX), "9:59:59.99");
    }

    /// Values that would break the line grammar are refused
    #[test]
    fn test_unrepresentable_fields() {
        let mut doc = Document::default();
        doc.styles.insert("a,b".to_string(), Style::default());
        let err = doc.to_substation(&WriteOptions::default()).unwrap_err();
        assert!(matches!(err, CoreError::UnrepresentableField { .. }), "{err}");

        let mut doc = Document::default();
        doc.push(Event {
            text: "line\nbreak".to_string(),
            ..Event::default()
        });
        assert!(doc.to_substation(&WriteOptions::default()).is_err());

        let mut doc = Document::default();
        doc.info.insert("Bad: Key".to_string(), "value".to_string());
        assert!(doc.to_substation(&WriteOptions::default()).is_err());

        // commas are fine in text
        let mut doc = Document::default();
        doc.push(Event {
            text: "a, b, c".to_string(),
            ..Event::default()
        });
        assert!(doc.to_substation(&WriteOptions::default()).is_ok());
    }

    /// Embedded fonts and graphics are kept between reads and writes
    #[test]
    fn test_attachments_round_trip() {
        let text = format!(
            "{SIMPLE_ASS_REF}\n[Fonts]\nfontname: font.ttf\n!!!!!!!!!!!!!!!\n\"\"\"\"\"\n\n[Graphics]\nfilename: logo.png\n123456\n"
        );
        let doc = read(&text);
        assert_eq!(doc.fonts["font.ttf"], vec!["!!!!!!!!!!!!!!!", "\"\"\"\"\""]);
        assert_eq!(doc.graphics["logo.png"], vec!["123456"]);

        let again = read(&write(&doc, ScriptVersion::AssV4));
        assert_eq!(again.fonts, doc.fonts);
        assert_eq!(again.graphics, doc.graphics);
        assert!(again.equals(&doc));
    }

    /// Leading spaces in event text survive a write and a read
    #[test]
    fn test_leading_spaces_in_text_round_trip() {
        let mut doc = Document::default();
        doc.push(Event {
            end: 1000,
            text: "  two leading spaces".to_string(),
            ..Event::default()
        });
        doc.push(Event {
            end: 1000,
            text: " , comma first".to_string(),
            ..Event::default()
        });

        for version in [ScriptVersion::AssV4, ScriptVersion::SsaV4] {
            let again = read(&write(&doc, version));
            assert_eq!(again.events[0].text, "  two leading spaces");
            assert_eq!(again.events[1].text, " , comma first");
            assert!(again.equals(&doc));
        }

        let doc = read("[Events]\nFormat: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\nDialogue: 0,0:00:00.00,0:00:01.00,Default,,0,0,0,,   indented text\n");
        assert_eq!(doc.events[0].text, "   indented text");
    }

    /// A custom header comment replaces the default one
    #[test]
    fn test_custom_header_comment() {
        let options = WriteOptions {
            header_comment: Some("first\nsecond".to_string()),
            ..WriteOptions::default()
        };
        let out = build_ref().to_substation(&options).unwrap().value;
        assert!(out.starts_with("[Script Info]\n; first\n; second\nWrapStyle: 0\n"));

        let options = WriteOptions {
            header_comment: None,
            ..WriteOptions::default()
        };
        let out = build_ref().to_substation(&options).unwrap().value;
        assert!(out.starts_with("[Script Info]\nWrapStyle: 0\n"));
    }
}

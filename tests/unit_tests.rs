use clap::{ArgAction, Parser};
use serde_json::json;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use imgvis::annotation::{color_key, outline_points, resolve_label, LabelFilter};
use imgvis::config::{Cli, Command, LoggingLevel};
use imgvis::docs::{render_index, render_markdown, INDEX_FILE};
use imgvis::options::{ColorSpec, Combination, Radius};
use imgvis::placeholders::Placeholders;
use imgvis::plugins::image_viewer::Delay;
use imgvis::plugins::*;
use imgvis::types::{DataKind, Dimensions, Rect, Rgb, Role};
use imgvis::{catalog, expand_placeholders, find_plugin, write_docs};

fn parse_plugin(args: &[&str]) -> PluginCommand {
    let mut argv = vec!["imgvis"];
    argv.extend_from_slice(args);
    match Cli::try_parse_from(argv).unwrap().command {
        Command::Plugin(plugin) => plugin,
        other => panic!("expected a plugin command, got {:?}", other),
    }
}

fn initialize(args: &[&str]) -> PluginSettings {
    parse_plugin(args).initialize().unwrap()
}

#[test]
fn test_catalog_names_match_commands() {
    let plugins = catalog();
    assert_eq!(plugins.len(), 7);

    let names: HashSet<&str> = plugins.iter().map(|p| p.name).collect();
    assert_eq!(names.len(), plugins.len());

    for plugin in &plugins {
        assert_eq!(plugin.command().get_name(), plugin.name);
        assert!(!plugin.description.is_empty());
    }
}

#[test]
fn test_catalog_data_kinds() {
    for plugin in catalog() {
        assert_eq!(plugin.accepts.len(), 1);
        match plugin.role {
            Role::Writer => assert!(plugin.generates.is_empty(), "{}", plugin.name),
            Role::Filter => assert_eq!(plugin.accepts, plugin.generates, "{}", plugin.name),
        }
    }

    let viewer = find_plugin("image-viewer").unwrap();
    assert_eq!(viewer.accepts, &[DataKind::ImageData]);
    let combine = find_plugin("combine-annotations-od").unwrap();
    assert_eq!(combine.accepts, &[DataKind::ObjectDetectionData]);
    assert_eq!(
        DataKind::ImageSegmentationData.to_string(),
        "idc.api.ImageSegmentationData"
    );
    assert!(find_plugin("no-such-plugin").is_err());
}

#[test]
fn test_every_option_states_a_default() {
    // Optional lists and the logger name fall back to behavior instead of a value
    let without_default = ["help", "labels", "colors", "logger_name"];

    for plugin in catalog() {
        let command = plugin.command();
        for arg in command.get_arguments() {
            let id = arg.get_id().as_str();
            if without_default.contains(&id) {
                continue;
            }
            if matches!(arg.get_action(), ArgAction::SetTrue) {
                continue;
            }
            assert!(
                !arg.get_default_values().is_empty(),
                "{}: option '{}' has no default",
                plugin.name,
                id
            );
        }
    }
}

#[test]
fn test_common_logging_options() {
    for plugin in catalog() {
        let command = plugin.command();
        let level = command
            .get_arguments()
            .find(|a| a.get_id() == "logging_level")
            .unwrap_or_else(|| panic!("{} lacks --logging_level", plugin.name));
        assert_eq!(level.get_short(), Some('l'));
        assert_eq!(
            level.get_default_values().first().and_then(|v| v.to_str()),
            Some("WARNING")
        );
        assert!(command.get_arguments().any(|a| a.get_long() == Some("logger_name")));
    }
}

#[test]
fn test_logger_settings() {
    let settings = initialize(&["image-viewer"]);
    let value = serde_json::to_value(&settings).unwrap();
    assert_eq!(value["plugin"], "image-viewer");
    assert_eq!(value["settings"]["logger"]["name"], "image-viewer");
    assert_eq!(value["settings"]["logger"]["level"], "WARNING");

    let plugin = parse_plugin(&["image-viewer", "-N", "viewer", "-l", "DEBUG"]);
    assert_eq!(plugin.logging().logging_level, LoggingLevel::Debug);
    match plugin.initialize().unwrap() {
        PluginSettings::ImageViewer(s) => assert_eq!(s.logger.name, "viewer"),
        other => panic!("unexpected settings: {:?}", other),
    }

    assert_eq!(
        LoggingLevel::Critical.to_level_filter(),
        log::LevelFilter::Error
    );
    assert!(Cli::try_parse_from(["imgvis", "image-viewer", "-l", "TRACE"]).is_err());
}

#[test]
fn test_input_placeholders() {
    let expanded = expand_placeholders(
        "{INPUT_PATH}|{INPUT_NAMEEXT}|{INPUT_NAMENOEXT}|{INPUT_EXT}|{INPUT_PARENT_PATH}|{INPUT_PARENT_NAME}",
        Some(Path::new("/some/where/file.txt")),
    );
    assert_eq!(expanded, "/some/where|file.txt|file|.txt|/some|where");
}

#[test]
fn test_input_placeholders_without_input_stay() {
    let expanded = expand_placeholders("{INPUT_NAMENOEXT}.png", None);
    assert_eq!(expanded, "{INPUT_NAMENOEXT}.png");

    let expanded = expand_placeholders("{INPUT_EXT}", Some(Path::new("/data/README")));
    assert_eq!(expanded, "");
}

#[test]
fn test_environment_placeholders() {
    let cwd = std::env::current_dir().unwrap();
    let tmp = std::env::temp_dir();

    assert_eq!(
        expand_placeholders("{CWD}", None),
        cwd.to_string_lossy().to_string()
    );
    assert_eq!(
        expand_placeholders("{TMP}/x", None),
        format!("{}/x", tmp.to_string_lossy())
    );
    if let Some(home) = dirs::home_dir() {
        assert_eq!(
            expand_placeholders("{HOME}", None),
            home.to_string_lossy().to_string()
        );
    }
    assert_eq!(expand_placeholders("{UNKNOWN}", None), "{UNKNOWN}");
}

#[test]
fn test_custom_placeholders() {
    let placeholders = Placeholders::parse("# output locations\n\nDATA = {TMP}/data\nRUN=001\n").unwrap();
    assert_eq!(placeholders.len(), 2);

    let expanded = placeholders.expand("{DATA}/{RUN}/{INPUT_NAMENOEXT}.png", Some(Path::new("img/a.jpg")));
    let expected = format!("{}/data/001/a.png", std::env::temp_dir().to_string_lossy());
    assert_eq!(expanded, expected);

    assert!(Placeholders::parse("CWD=/elsewhere").is_err());
    assert!(Placeholders::parse("no separator").is_err());
    assert!(Placeholders::parse("BAD-NAME=1").is_err());
}

#[test]
fn test_custom_placeholders_refer_to_each_other() {
    // Resolution does not depend on the alphabetical order of the names
    let forward = Placeholders::parse("A=x\nB={A}/y").unwrap();
    assert_eq!(forward.expand("{B}", None), "x/y");
    let backward = Placeholders::parse("B=x\nA={B}/y").unwrap();
    assert_eq!(backward.expand("{A}", None), "x/y");

    let nested = Placeholders::parse("ROOT={TMP}\nDATA={ROOT}/data\nOUT={DATA}/out").unwrap();
    let expected = format!("{}/data/out/a.png", std::env::temp_dir().to_string_lossy());
    assert_eq!(nested.expand("{OUT}/a.png", None), expected);

    let cycle = Placeholders::parse("A={B}\nB={A}").unwrap();
    assert_eq!(cycle.expand("{A}", None), "{A}");
}

#[test]
fn test_substituted_values_are_not_expanded_again() {
    let expanded = expand_placeholders(
        "{INPUT_NAMENOEXT}-{INPUT_PARENT_NAME}",
        Some(Path::new("/data/{TMP}/{CWD}.png")),
    );
    assert_eq!(expanded, "{CWD}-{TMP}");

    let placeholders = Placeholders::parse("RUN=1").unwrap();
    assert_eq!(
        placeholders.expand("{INPUT_NAMENOEXT}", Some(Path::new("/data/{RUN}.png"))),
        "{RUN}"
    );
}

#[test]
fn test_load_placeholders_from_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("placeholders.txt");
    fs::write(&path, "OUT=/results\n").unwrap();

    let placeholders = Placeholders::load(&path).unwrap();
    assert_eq!(placeholders.expand("{OUT}/overlay.png", None), "/results/overlay.png");

    assert!(Placeholders::load(&temp_dir.path().join("missing.txt")).is_err());
}

#[test]
fn test_annotation_overlay_od_custom_colors_and_labels() {
    let settings = initialize(&[
        "add-annotation-overlay-od",
        "--labels",
        "dog",
        "cat",
        "-c",
        "255,0,0",
        "0,255,0",
    ]);
    let settings = match settings {
        PluginSettings::AnnotationOverlayOd(s) => s,
        other => panic!("unexpected settings: {:?}", other),
    };
    assert_eq!(
        settings.colors,
        ColorSpec::Custom(vec![Rgb(255, 0, 0), Rgb(0, 255, 0)])
    );
    assert!(settings.labels.accepts("dog"));
    assert!(!settings.labels.accepts("bird"));
    assert_eq!(settings.outline_thickness, Some(3));
    assert_eq!(settings.fill_alpha, None);
    assert_eq!(settings.label_key, "type");
}

#[test]
fn test_annotation_overlay_od_color_list_name() {
    match initialize(&["add-annotation-overlay-od", "-c", "x11"]) {
        PluginSettings::AnnotationOverlayOd(s) => {
            assert_eq!(s.colors, ColorSpec::Named("x11".to_string()))
        }
        other => panic!("unexpected settings: {:?}", other),
    }
    match initialize(&["add-annotation-overlay-od", "-c", "x11"]) {
        PluginSettings::AnnotationOverlayOd(s) => assert_eq!(s.colors.unchecked_list(), None),
        other => panic!("unexpected settings: {:?}", other),
    }
    match initialize(&["add-annotation-overlay-od", "-c", "pastel"]) {
        PluginSettings::AnnotationOverlayOd(s) => {
            assert_eq!(s.colors, ColorSpec::Named("pastel".to_string()));
            assert_eq!(s.colors.unchecked_list(), Some("pastel"));
        }
        other => panic!("unexpected settings: {:?}", other),
    }
    match initialize(&["add-annotation-overlay-od"]) {
        PluginSettings::AnnotationOverlayOd(s) => assert_eq!(s.colors, ColorSpec::Default),
        other => panic!("unexpected settings: {:?}", other),
    }

    let invalid = parse_plugin(&["add-annotation-overlay-od", "-c", "255,0,0", "red"]);
    assert!(invalid.initialize().is_err());
}

#[test]
fn test_text_expansion() {
    let settings = match initialize(&[
        "add-annotation-overlay-od",
        "--text_format",
        "{label}: {score} {count} {ok} {nested}",
        "--num_decimals",
        "2",
    ]) {
        PluginSettings::AnnotationOverlayOd(s) => s,
        other => panic!("unexpected settings: {:?}", other),
    };
    let text = settings.text.unwrap();
    let metadata = json!({"score": 0.91234, "count": 3, "ok": true, "nested": [1]});
    let expanded = text.expand("dog", metadata.as_object().unwrap());
    assert_eq!(expanded, "dog: 0.91 3 True {nested}");

    let flag = json!({"ok": false});
    assert_eq!(text.expand("cat", flag.as_object().unwrap()), "cat: {score} {count} False {nested}");
}

#[test]
fn test_empty_text_format_disables_text() {
    match initialize(&["add-annotation-overlay-od", "--text_format", ""]) {
        PluginSettings::AnnotationOverlayOd(s) => assert!(s.text.is_none()),
        other => panic!("unexpected settings: {:?}", other),
    }
}

#[test]
fn test_text_placement_anchor() {
    let rect = Rect::new(10, 20, 110, 70);
    let origin = |placement: &str| match initialize(&[
        "add-annotation-overlay-od",
        "--text_placement",
        placement,
    ]) {
        PluginSettings::AnnotationOverlayOd(s) => s.text.unwrap().origin(&rect, 20, 10),
        other => panic!("unexpected settings: {:?}", other),
    };

    assert_eq!(origin("T,L"), (10, 20));
    assert_eq!(origin("c,c"), (50, 40));
    assert_eq!(origin("B,R"), (90, 60));
    assert!(Cli::try_parse_from([
        "imgvis",
        "add-annotation-overlay-od",
        "--text_placement",
        "X,L"
    ])
    .is_err());
}

#[test]
fn test_center_dot_bounds() {
    let rect = Rect::new(0, 0, 9, 9);

    let settings = match initialize(&["add-center-overlay-od"]) {
        PluginSettings::CenterOverlayOd(s) => s,
        other => panic!("unexpected settings: {:?}", other),
    };
    assert_eq!(settings.radius, Radius::Absolute(10.0));
    let bounds = settings.dot_bounds(&rect);
    assert_eq!((bounds.x0, bounds.y0, bounds.x1, bounds.y1), (-5.0, -5.0, 15.0, 15.0));

    let settings = match initialize(&["add-center-overlay-od", "--radius", "0.5"]) {
        PluginSettings::CenterOverlayOd(s) => s,
        other => panic!("unexpected settings: {:?}", other),
    };
    let bounds = settings.dot_bounds(&rect);
    assert_eq!((bounds.x0, bounds.y0, bounds.x1, bounds.y1), (3.0, 3.0, 7.0, 7.0));
}

#[test]
fn test_center_dot_zero_radius() {
    let settings = match initialize(&["add-center-overlay-od", "--radius", "0"]) {
        PluginSettings::CenterOverlayOd(s) => s,
        other => panic!("unexpected settings: {:?}", other),
    };
    assert_eq!(settings.radius, Radius::Relative(0.0));
    let bounds = settings.dot_bounds(&Rect::new(0, 0, 9, 9));
    assert_eq!((bounds.x0, bounds.y0, bounds.x1, bounds.y1), (5.0, 5.0, 5.0, 5.0));
}

#[test]
fn test_outline_and_fill_options() {
    let settings = match initialize(&[
        "add-center-overlay-od",
        "--outline_thickness",
        "-1",
        "--fill",
        "--colors",
        "1,2,3",
    ]) {
        PluginSettings::CenterOverlayOd(s) => s,
        other => panic!("unexpected settings: {:?}", other),
    };
    assert_eq!(settings.outline_thickness, None);
    assert_eq!(settings.fill_alpha, Some(128));
    assert_eq!(settings.custom_colors, vec![Rgb(1, 2, 3)]);

    assert!(Cli::try_parse_from(["imgvis", "add-center-overlay-od", "--fill_alpha", "300"]).is_err());
}

#[test]
fn test_annotation_overlay_ic_background() {
    let settings = match initialize(&["add-annotation-overlay-ic", "-B"]) {
        PluginSettings::AnnotationOverlayIc(s) => s,
        other => panic!("unexpected settings: {:?}", other),
    };
    assert_eq!(settings.font.family, "sans-serif");
    assert_eq!(settings.font.size, 14);
    assert_eq!(settings.font_color, Rgb(255, 255, 255));
    assert_eq!(settings.background_box(30, 10), Some(Rect::new(3, 3, 39, 19)));

    match initialize(&["add-annotation-overlay-ic", "-p", "10,20"]) {
        PluginSettings::AnnotationOverlayIc(s) => {
            assert_eq!((s.position.x, s.position.y), (10, 20));
            assert_eq!(s.background_box(30, 10), None);
        }
        other => panic!("unexpected settings: {:?}", other),
    }
}

#[test]
fn test_annotation_overlay_is_layers() {
    let settings = match initialize(&["add-annotation-overlay-is", "--labels", "road", "-a", "100"]) {
        PluginSettings::AnnotationOverlayIs(s) => s,
        other => panic!("unexpected settings: {:?}", other),
    };
    assert_eq!(settings.alpha, 100);
    let layers = vec!["sky".to_string(), "road".to_string()];
    assert_eq!(settings.selected_layers(&layers), vec!["road"]);

    match initialize(&["add-annotation-overlay-is"]) {
        PluginSettings::AnnotationOverlayIs(s) => {
            assert_eq!(s.alpha, 64);
            assert_eq!(s.selected_layers(&layers), vec!["sky", "road"]);
        }
        other => panic!("unexpected settings: {:?}", other),
    }
}

#[test]
fn test_combine_annotations_options() {
    let settings = match initialize(&["combine-annotations-od"]) {
        PluginSettings::CombineAnnotationsOd(s) => s,
        other => panic!("unexpected settings: {:?}", other),
    };
    assert_eq!(settings.min_iou, 0.7);
    assert_eq!(settings.combination, Combination::Intersect);
    assert_eq!(settings.output_file, "./combined.report");
    assert_eq!(settings.stream_index_key, "stream_index");
    assert!(settings.is_match(0.7));
    assert!(!settings.is_match(0.69));

    match initialize(&["combine-annotations-od", "--min_iou", "0", "--combination", "union"]) {
        PluginSettings::CombineAnnotationsOd(s) => {
            assert_eq!(s.combination, Combination::Union);
            assert!(!s.is_match(0.0));
            assert!(s.is_match(0.01));
        }
        other => panic!("unexpected settings: {:?}", other),
    }

    assert!(Cli::try_parse_from(["imgvis", "combine-annotations-od", "--min_iou", "1.5"]).is_err());
    assert!(Cli::try_parse_from(["imgvis", "combine-annotations-od", "--combination", "average"]).is_err());
    assert!(parse_plugin(&["combine-annotations-od", "-o", ""]).initialize().is_err());
}

#[test]
fn test_combine_annotations_output_path() {
    let settings = match initialize(&[
        "combine-annotations-od",
        "-o",
        "{INPUT_PATH}/{INPUT_NAMENOEXT}.report",
    ]) {
        PluginSettings::CombineAnnotationsOd(s) => s,
        other => panic!("unexpected settings: {:?}", other),
    };
    let path = settings.output_path(&Placeholders::new(), Some(Path::new("/data/img/a.jpg")));
    assert_eq!(path, PathBuf::from("/data/img/a.report"));
}

#[test]
fn test_image_viewer_fit_and_delay() {
    let settings = match initialize(&["image-viewer"]) {
        PluginSettings::ImageViewer(s) => s,
        other => panic!("unexpected settings: {:?}", other),
    };
    assert_eq!(settings.title, "image-dataset-converter");
    assert_eq!(settings.delay, Delay::Millis(500));
    assert_eq!(settings.fit(Dimensions::new(320, 240)), Dimensions::new(320, 240));
    assert_eq!(settings.fit(Dimensions::new(1280, 480)), Dimensions::new(640, 240));
    assert_eq!(settings.fit(Dimensions::new(480, 960)), Dimensions::new(240, 480));

    match initialize(&["image-viewer", "-d", "0"]) {
        PluginSettings::ImageViewer(s) => assert_eq!(s.delay, Delay::WaitForKey),
        other => panic!("unexpected settings: {:?}", other),
    }
    match initialize(&["image-viewer", "-d", "-1", "-p", "-10,20"]) {
        PluginSettings::ImageViewer(s) => {
            assert_eq!(s.delay, Delay::NoWait);
            assert_eq!((s.position.x, s.position.y), (-10, 20));
        }
        other => panic!("unexpected settings: {:?}", other),
    }
    assert!(Cli::try_parse_from(["imgvis", "image-viewer", "-s", "640"]).is_err());
}

#[test]
fn test_to_annotation_overlay_scale_to() {
    match initialize(&["to-annotation-overlay-od", "-s", "100"]) {
        PluginSettings::ToAnnotationOverlayOd(s) => {
            assert_eq!(s.scale_to, None);
            assert_eq!(s.output_file, "./output.png");
        }
        other => panic!("unexpected settings: {:?}", other),
    }
    match initialize(&["to-annotation-overlay-od", "-s", "200,100", "-c", "0,0,255,32"]) {
        PluginSettings::ToAnnotationOverlayOd(s) => {
            assert_eq!(s.scale_to, Some(Dimensions::new(200, 100)));
            assert_eq!(s.color.to_string(), "0,0,255,32");
        }
        other => panic!("unexpected settings: {:?}", other),
    }
    assert!(Cli::try_parse_from(["imgvis", "to-annotation-overlay-od", "-c", "255,0,0"]).is_err());
}

#[test]
fn test_overlay_canvas_growth() {
    let settings = match initialize(&["to-annotation-overlay-od"]) {
        PluginSettings::ToAnnotationOverlayOd(s) => s,
        other => panic!("unexpected settings: {:?}", other),
    };
    let mut canvas = settings.canvas();
    assert_eq!(canvas.size(), None);

    let scale = canvas.add_image(Dimensions::new(100, 50));
    assert_eq!(canvas.size(), Some(Dimensions::new(100, 50)));
    assert_eq!(scale.apply(10.6, 3.0), (10, 3));

    canvas.add_image(Dimensions::new(80, 120));
    assert_eq!(canvas.size(), Some(Dimensions::new(100, 120)));
}

#[test]
fn test_overlay_canvas_scaling() {
    let settings = match initialize(&["to-annotation-overlay-od", "-s", "200,100"]) {
        PluginSettings::ToAnnotationOverlayOd(s) => s,
        other => panic!("unexpected settings: {:?}", other),
    };
    let mut canvas = settings.canvas();

    let scale = canvas.add_image(Dimensions::new(100, 50));
    assert_eq!(scale.apply(10.6, 3.0), (21, 6));

    let scale = canvas.add_image(Dimensions::new(400, 400));
    assert_eq!(canvas.size(), Some(Dimensions::new(200, 100)));
    assert_eq!(scale.apply(400.0, 400.0), (200, 100));
}

#[test]
fn test_labels_and_outlines() {
    let metadata = json!({"type": "dog", "score": 0.5});
    let metadata = metadata.as_object().unwrap();
    assert_eq!(resolve_label(metadata, "type"), "dog");
    assert_eq!(resolve_label(metadata, "class"), "object");

    assert_eq!(color_key("dog", 3, false), "dog");
    assert_eq!(color_key("dog", 3, true), "object-3");

    let no_labels: Vec<String> = Vec::new();
    let filter = LabelFilter::from_labels(Some(no_labels.as_slice()));
    assert!(!filter.is_restricted());
    assert!(filter.accepts("anything"));

    let rect = Rect::new(1, 2, 5, 8);
    let polygon = vec![(1.0, 2.0), (5.0, 2.0), (3.0, 8.0)];
    assert_eq!(outline_points(&rect, Some(polygon.as_slice()), false), polygon);
    assert_eq!(
        outline_points(&rect, Some(polygon.as_slice()), true),
        vec![(1.0, 2.0), (5.0, 2.0), (5.0, 8.0), (1.0, 8.0)]
    );
    assert_eq!(outline_points(&rect, None, false).len(), 4);
}

#[test]
fn test_render_markdown() {
    let viewer = find_plugin("image-viewer").unwrap();
    let md = render_markdown(&viewer);
    assert!(md.starts_with("# image-viewer\n"));
    assert!(md.contains("* accepts: idc.api.ImageData"));
    assert!(!md.contains("* generates:"));
    assert!(md.contains("Displays images."));
    assert!(md.contains("--delay"));

    let writer = find_plugin("to-annotation-overlay-od").unwrap();
    let md = render_markdown(&writer);
    assert!(md.contains("{INPUT_NAMENOEXT}"));

    let combine = find_plugin("combine-annotations-od").unwrap();
    let md = render_markdown(&combine);
    assert!(md.contains("How to combine the annotations (intersect|union)"));

    let filter = find_plugin("add-annotation-overlay-is").unwrap();
    let md = render_markdown(&filter);
    assert!(md.contains("* generates: idc.api.ImageSegmentationData"));
}

#[test]
fn test_write_docs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output_dir = temp_dir.path().join("docs");

    let written = write_docs(&output_dir).unwrap();
    assert_eq!(written.len(), catalog().len() + 1);
    for plugin in catalog() {
        let page = fs::read_to_string(output_dir.join(format!("{}.md", plugin.name))).unwrap();
        assert!(page.contains(plugin.description));
    }

    let index = fs::read_to_string(output_dir.join(INDEX_FILE)).unwrap();
    assert_eq!(index, render_index(&catalog()));
    assert!(index.contains("## Writers"));
    assert!(index.contains("[image-viewer](image-viewer.md)"));

    // Regenerating into an existing directory works
    assert!(write_docs(&output_dir).is_ok());
}

#[test]
fn test_top_level_commands() {
    match Cli::try_parse_from(["imgvis", "expand", "{CWD}/x", "-i", "a/b.png"]).unwrap().command {
        Command::Expand {
            template, input, ..
        } => {
            assert_eq!(template, "{CWD}/x");
            assert_eq!(input, Some(PathBuf::from("a/b.png")));
        }
        other => panic!("unexpected command: {:?}", other),
    }
    match Cli::try_parse_from(["imgvis", "list", "--json"]).unwrap().command {
        Command::List { json } => assert!(json),
        other => panic!("unexpected command: {:?}", other),
    }
    assert!(Cli::try_parse_from(["imgvis", "no-such-plugin"]).is_err());

    let listing = serde_json::to_value(catalog()).unwrap();
    assert_eq!(listing[0]["name"], "add-annotation-overlay-ic");
    assert_eq!(listing[0]["role"], "filter");
}

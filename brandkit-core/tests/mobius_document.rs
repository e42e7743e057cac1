use brandkit_core::mobius::{self, Labels, MobiusParams, Scene, Theme};

fn default_doc() -> String {
    let params = MobiusParams { rot_x: 25.0, rot_y: 50.0, rot_z: 5.0, distance: 4.5, theme: Theme::Dark, ..MobiusParams::default() };
    mobius::render_svg(&params, &Labels::default()).expect("render")
}

#[test]
fn root_declares_fixed_viewbox() {
    let doc = default_doc();
    let root = doc.lines().next().expect("first line");
    assert!(root.starts_with("<svg "), "{root}");
    assert!(root.contains(r#"viewBox="0 0 160 160""#));
    assert!(root.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
    assert!(doc.trim_end().ends_with("</svg>"));
}

#[test]
fn has_band_highlight_and_shadow_gradients() {
    let doc = default_doc();
    for i in 0..5 {
        assert!(doc.contains(&format!(r#"<linearGradient id="grad-{i}""#)), "grad-{i}");
    }
    assert!(doc.contains(r#"<radialGradient id="highlight""#));
    assert!(doc.contains(r#"<radialGradient id="shadow-gradient""#));
    assert!(doc.contains(r#"<filter id="shadow""#));
    assert!(doc.contains(r#"fill="url(#shadow-gradient)""#));
}

fn level_params() -> MobiusParams {
    MobiusParams { rot_x: 0.0, rot_y: 0.0, rot_z: 0.0, ..MobiusParams::default() }
}

fn shaded_lines(doc: &str) -> Vec<&str> {
    doc.lines().filter(|l| l.contains(r#"stroke="none""#)).collect()
}

fn grad_index(line: &str) -> usize {
    let start = line.find("url(#grad-").expect("band fill") + "url(#grad-".len();
    let digits: String = line[start..].chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().expect("band index")
}

#[test]
fn emits_every_patch() {
    let doc = default_doc();
    assert_eq!(shaded_lines(&doc).len(), 79 * 11);
}

#[test]
fn level_strip_gets_highlights_after_shaded_paths() {
    let doc = mobius::render_svg(&level_params(), &Labels::default()).expect("render");
    let lines: Vec<&str> = doc.lines().collect();
    let highlight_rows: Vec<usize> =
        (0..lines.len()).filter(|&i| lines[i].contains(r#"fill="url(#highlight)""#)).collect();
    assert!((1..=25).contains(&highlight_rows.len()), "{} highlights", highlight_rows.len());
    assert!(highlight_rows.iter().all(|&i| lines[i].contains(r#"opacity="0.25""#)));

    let last_shaded = (0..lines.len()).rev().find(|&i| lines[i].contains(r#"stroke="none""#)).expect("shaded path");
    assert!(highlight_rows[0] > last_shaded);

    let scene = Scene::build(&level_params()).expect("scene");
    assert_eq!(scene.highlights().len(), highlight_rows.len());
}

#[test]
fn underside_patches_are_dimmed() {
    let doc = default_doc();
    let scene = Scene::build(&MobiusParams::default()).expect("scene");
    let underside = scene.patches.iter().filter(|p| p.is_underside()).count();
    assert!(underside > 0);
    assert_eq!(doc.matches(r#"opacity="0.9""#).count(), underside);
    for (line, patch) in shaded_lines(&doc).into_iter().zip(&scene.patches) {
        let expected = if patch.is_underside() { r#"opacity="0.9""# } else { r#"opacity="1.0""# };
        assert!(line.contains(expected), "{line}");
    }
}

#[test]
fn fills_follow_shading_bands() {
    for params in [MobiusParams::default(), level_params()] {
        let doc = mobius::render_svg(&params, &Labels::default()).expect("render");
        let scene = Scene::build(&params).expect("scene");
        let lines = shaded_lines(&doc);
        assert_eq!(lines.len(), scene.patches.len());
        for (line, patch) in lines.into_iter().zip(&scene.patches) {
            assert_eq!(grad_index(line), scene.shading.band(patch.intensity), "{line}");
            assert!(line.contains(&patch.path_data()));
        }
    }
}

#[test]
fn output_is_deterministic() {
    assert_eq!(default_doc(), default_doc());
}

#[test]
fn themes_differ_only_in_colours() {
    let dark = mobius::render_svg(&MobiusParams::default(), &Labels::default()).expect("dark");
    let light = mobius::render_svg(&MobiusParams { theme: Theme::Light, ..MobiusParams::default() }, &Labels::default())
        .expect("light");
    assert_ne!(dark, light);
    assert_eq!(dark.lines().count(), light.lines().count());
    assert!(light.contains("#c2c2c2"));
}

#[test]
fn labels_are_escaped() {
    let labels = Labels { title: "A & B <icon>".into(), description: "d".into() };
    let doc = mobius::render_svg(&MobiusParams::default(), &labels).expect("render");
    assert!(doc.contains("<title id=\"title\">A &amp; B &lt;icon&gt;</title>"));
}

#[test]
fn scene_is_sorted_back_to_front() {
    let scene = Scene::build(&MobiusParams::default()).expect("scene");
    assert!(scene.patches.windows(2).all(|w| w[0].depth <= w[1].depth));
    let highlights = scene.highlights();
    assert!(highlights.iter().all(|p| p.intensity > 0.42 && p.v_mid >= 0.0));
}

#[test]
fn bad_distance_is_rejected() {
    let params = MobiusParams { distance: 0.0, ..MobiusParams::default() };
    assert!(mobius::render_svg(&params, &Labels::default()).is_err());
}

#[test]
fn writes_file_with_parent_dirs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("icons").join("mobius.svg");
    mobius::write_svg(&path, &MobiusParams::default(), &Labels::default()).expect("write");
    let text = std::fs::read_to_string(&path).expect("read");
    assert_eq!(text, default_doc());
}

pub(crate) use super::*;

fn sample_profile() -> PerformanceProfile {
    let a = Matrix::from_vec(3, 2, vec![1.0, 2.0, 4.0, 1.0, 2.0, 2.0]).expect("valid shape");
    PerformanceProfile::compute(&a, 4.0, 16).expect("valid input")
}

#[test]
fn test_config_defaults() {
    let config = PlotConfig::default();
    assert_eq!(config.file_name, "plot.svg");
    assert_eq!(config.n_intervals, 100);
    assert_eq!(config.line_width, 2);
    assert_eq!(config.marker_size, 12);
    assert_eq!(config.mark_every, 1);
    assert!(config.alg_legend.is_none());
    assert!(config.caption.is_none());
}

#[test]
fn test_config_builders() {
    let config = PlotConfig::new()
        .with_file_name("out.png")
        .with_legend(vec!["a", "b"])
        .with_n_intervals(50)
        .with_line_width(3)
        .with_marker_size(8)
        .with_mark_every(5)
        .with_caption("solver comparison")
        .with_size(800, 600);

    assert_eq!(config.file_name, "out.png");
    assert_eq!(
        config.alg_legend,
        Some(vec!["a".to_string(), "b".to_string()])
    );
    assert_eq!(config.n_intervals, 50);
    assert_eq!(config.line_width, 3);
    assert_eq!(config.marker_size, 8);
    assert_eq!(config.mark_every, 5);
    assert_eq!(config.caption.as_deref(), Some("solver comparison"));
    assert_eq!(config.size, (800, 600));
}

#[test]
fn test_render_svg_writes_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("profile.svg");
    let config = PlotConfig::new()
        .with_file_name(path.to_str().expect("utf-8 path"))
        .with_legend(vec!["first", "second"]);

    render(&sample_profile(), &config).expect("svg render succeeds");

    let meta = std::fs::metadata(&path).expect("output file exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_render_svg_without_legend() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("bare.svg");
    let config = PlotConfig::new().with_file_name(path.to_str().expect("utf-8 path"));

    render(&sample_profile(), &config).expect("svg render succeeds");
    assert!(path.exists());
}

#[test]
fn test_render_many_algorithms_cycles_palettes() {
    // 10 columns exercises every line style and marker at least once.
    let data: Vec<f32> = (0..30).map(|v| 1.0 + (v % 7) as f32).collect();
    let a = Matrix::from_vec(3, 10, data).expect("valid shape");
    let profile = PerformanceProfile::compute(&a, 8.0, 12).expect("valid input");

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("many.svg");
    let config = PlotConfig::new().with_file_name(path.to_str().expect("utf-8 path"));

    render(&profile, &config).expect("svg render succeeds");
    assert!(path.exists());
}

#[test]
fn test_render_unknown_extension_rejected() {
    let config = PlotConfig::new().with_file_name("plot.pdf");
    let err = render(&sample_profile(), &config).unwrap_err();
    assert!(matches!(err, PerfilarError::Render(_)));
    assert!(err.to_string().contains("pdf"));
}

#[test]
fn test_render_no_extension_rejected() {
    let config = PlotConfig::new().with_file_name("plot");
    let err = render(&sample_profile(), &config).unwrap_err();
    assert!(matches!(err, PerfilarError::Render(_)));
}

#[test]
fn test_render_wrong_legend_length_rejected() {
    let config = PlotConfig::new().with_legend(vec!["only one"]);
    let err = render(&sample_profile(), &config).unwrap_err();
    assert!(matches!(err, PerfilarError::InvalidParameter { .. }));
}

#[test]
fn test_render_zero_mark_every_rejected() {
    let config = PlotConfig::new().with_mark_every(0);
    let err = render(&sample_profile(), &config).unwrap_err();
    assert!(matches!(err, PerfilarError::InvalidParameter { .. }));
}

#[test]
fn test_render_extension_is_case_insensitive() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("upper.SVG");
    let config = PlotConfig::new().with_file_name(path.to_str().expect("utf-8 path"));

    render(&sample_profile(), &config).expect("svg render succeeds");
    assert!(path.exists());
}

#[test]
fn test_performance_profile_computes_and_renders() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("combined.svg");
    let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 2.0, 1.0]).expect("valid shape");
    let config = PlotConfig::new()
        .with_file_name(path.to_str().expect("utf-8 path"))
        .with_n_intervals(2);

    let profile = performance_profile(&a, 2.0, &config).expect("compute and render");

    assert_eq!(profile.theta(), &[1.0, 2.0]);
    assert_eq!(profile.curve(0), &[0.5, 1.0]);
    assert!(path.exists());
}

#[test]
fn test_performance_profile_propagates_compute_errors() {
    let a = Matrix::from_vec(1, 1, vec![1.0]).expect("valid shape");
    let config = PlotConfig::new();
    let err = performance_profile(&a, 0.9, &config).unwrap_err();
    assert!(matches!(err, PerfilarError::InvalidParameter { .. }));
}

#[test]
fn test_config_serde_round_trip() {
    let config = PlotConfig::new()
        .with_legend(vec!["a", "b"])
        .with_caption("caption");
    let json = serde_json::to_string(&config).expect("serializable");
    let back: PlotConfig = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(back, config);
}

#[test]
fn test_render_th_max_one_degenerate_axis() {
    let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 2.0, 1.0]).expect("valid shape");
    let profile = PerformanceProfile::compute(&a, 1.0, 3).expect("valid input");

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("degenerate.svg");
    let config = PlotConfig::new().with_file_name(path.to_str().expect("utf-8 path"));

    render(&profile, &config).expect("svg render succeeds");
    assert!(path.exists());
}

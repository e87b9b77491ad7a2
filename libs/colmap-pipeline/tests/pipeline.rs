use colmap_map::RandomIds;
use colmap_pipeline::source::JsonMeshDirectory;
use colmap_pipeline::{
    dedupe_gdt, generate_maps, remove_invalid_brushes, run, BrushRemoval, Command, Invocation,
    MeshError, PipelineError, SourceError,
};
use config::BrushSettings;
use std::fs;
use std::path::Path;

const WALL: &str = r#"{
    "vertices": [[0, 0, 0], [1, 0, 0], [1, 0, 1], [0, 0, 1]],
    "triangles": [[0, 1, 2], [0, 2, 3], [0, 1, 1]]
}"#;

const FLOOR: &str = r#"{
    "matrix_world": [[2, 0, 0, 0], [0, 2, 0, 0], [0, 0, 1, 1], [0, 0, 0, 1]],
    "vertices": [[0, 0, 0], [1, 0, 0], [0, 1, 0]],
    "triangles": [[0, 1, 2]]
}"#;

fn write_exports(dir: &Path) {
    fs::write(dir.join("wall.json"), WALL).unwrap();
    fs::write(dir.join("floor.json"), FLOOR).unwrap();
}

fn settings() -> BrushSettings {
    BrushSettings::new(0.16, 1.0, "clip_player", "lightmap_gray").unwrap()
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn brush_headers(text: &str) -> Vec<&str> {
    text.lines().filter(|l| l.starts_with("// brush")).collect()
}

#[test]
fn generates_then_removes_brushes() {
    let geometry = tempfile::tempdir().unwrap();
    write_exports(geometry.path());
    let out = tempfile::tempdir().unwrap();
    let maps = out.path().join("nested").join("maps");

    let report = generate_maps(
        &names(&["wall", "floor"]),
        &JsonMeshDirectory::new(geometry.path()),
        &maps,
        &settings(),
        &RandomIds,
    )
    .unwrap();

    assert!(report.failed.is_empty());
    assert_eq!(report.written.len(), 2);
    assert_eq!(report.written[0].mesh, "wall");
    assert_eq!(report.written[0].brushes, 2);
    assert_eq!(report.written[0].skipped.len(), 1);
    assert_eq!(report.written[0].skipped[0].index, 2);

    let wall = fs::read_to_string(maps.join("wall.map")).unwrap();
    assert!(wall.starts_with("iwmap 4\n"));
    assert!(wall.contains(" clip_player 64 64 0 0 0 0 lightmap_gray 16 16 0 0 0 0"));
    assert_eq!(brush_headers(&wall), vec!["// brush 0", "// brush 1"]);

    // World matrix scales x and y by two and lifts z by one.
    let floor = fs::read_to_string(maps.join("floor.map")).unwrap();
    assert!(floor.contains("( 2 0 1 )"));
    assert!(floor.contains("( 0 2 1.16 )"));

    let cleanup = remove_invalid_brushes(
        &maps,
        &[
            BrushRemoval {
                mesh: "wall".to_string(),
                brushes: vec![0, 7],
            },
            BrushRemoval {
                mesh: "ghost".to_string(),
                brushes: vec![1],
            },
            BrushRemoval {
                mesh: "floor".to_string(),
                brushes: vec![],
            },
        ],
    );

    assert_eq!(cleanup.processed.len(), 1);
    assert_eq!(cleanup.missing, vec![maps.join("ghost.map")]);
    assert!(cleanup.failed.is_empty());
    assert_eq!(cleanup.removed_count(), 1);

    let cleaned = fs::read_to_string(maps.join("wall.map")).unwrap();
    assert_eq!(brush_headers(&cleaned), vec!["// brush 1"]);
    assert!(cleaned.contains("\"classname\" \"misc_model\""));
    assert_eq!(cleaned.matches('{').count(), cleaned.matches('}').count());
    assert_eq!(fs::read_dir(&maps).unwrap().count(), 2);
}

#[test]
fn missing_mesh_aborts_generation() {
    let geometry = tempfile::tempdir().unwrap();
    write_exports(geometry.path());
    let out = tempfile::tempdir().unwrap();

    let result = generate_maps(
        &names(&["wall", "roof"]),
        &JsonMeshDirectory::new(geometry.path()),
        out.path(),
        &settings(),
        &RandomIds,
    );

    assert!(matches!(
        result,
        Err(PipelineError::Source(SourceError::NotFound { name })) if name == "roof"
    ));
    assert!(!out.path().join("roof.map").exists());
}

#[test]
fn unreadable_export_does_not_stop_later_meshes() {
    let geometry = tempfile::tempdir().unwrap();
    write_exports(geometry.path());
    fs::write(geometry.path().join("broken.json"), "{ not json").unwrap();
    fs::write(
        geometry.path().join("bad_index.json"),
        r#"{"vertices": [[0, 0, 0]], "triangles": [[0, 1, 2]]}"#,
    )
    .unwrap();
    let out = tempfile::tempdir().unwrap();

    let report = generate_maps(
        &names(&["broken", "wall", "bad_index", "floor"]),
        &JsonMeshDirectory::new(geometry.path()),
        out.path(),
        &settings(),
        &RandomIds,
    )
    .unwrap();

    let written: Vec<&str> = report.written.iter().map(|m| m.mesh.as_str()).collect();
    assert_eq!(written, vec!["wall", "floor"]);
    assert_eq!(report.failed.len(), 2);
    assert!(matches!(
        &report.failed[0],
        (name, MeshError::Source(SourceError::Parse { .. })) if name == "broken"
    ));
    assert!(matches!(
        &report.failed[1],
        (name, MeshError::Source(SourceError::Geometry { .. })) if name == "bad_index"
    ));
    assert!(out.path().join("wall.map").exists());
    assert!(out.path().join("floor.map").exists());
    assert!(!out.path().join("broken.map").exists());
}

#[test]
fn dedupes_gdt_into_new_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("export.gdt");
    let output = dir.path().join("deduped.gdt");
    let gdt = concat!(
        "{\n",
        "\t\"wall_a\" ( \"xmodel.gdf\" )\n",
        "\t{\n",
        "\t\t\"type\" \"rigid\"\n",
        "\t}\n",
        "\t\"wall_a\" ( \"xmodel.gdf\" )\n",
        "\t{\n",
        "\t\t\"type\" \"animated\"\n",
        "\t}\n",
        "}\n",
    );
    fs::write(&input, gdt).unwrap();

    let report = dedupe_gdt(&input, &output);

    assert_eq!(report.removed_count(), 1);
    assert_eq!(fs::read_to_string(&input).unwrap(), gdt);
    let deduped = fs::read_to_string(&output).unwrap();
    assert!(deduped.contains("\"rigid\""));
    assert!(!deduped.contains("\"animated\""));
}

#[test]
fn missing_gdt_is_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.gdt");
    let output = dir.path().join("out.gdt");

    let report = dedupe_gdt(&input, &output);

    assert_eq!(report.missing, vec![input]);
    assert!(report.processed.is_empty());
    assert!(!output.exists());
}

#[test]
fn runs_from_settings_file() {
    let project = tempfile::tempdir().unwrap();
    let exports = project.path().join("exports");
    fs::create_dir(&exports).unwrap();
    write_exports(&exports);
    let settings_path = project.path().join("data.json");
    fs::write(
        &settings_path,
        r#"{
            "mesh_names": ["floor"],
            "geometry_dir": "exports",
            "coll_maps_dir": "collmaps",
            "material_type": "missile",
            "unit_scale": 1.0
        }"#,
    )
    .unwrap();

    let summary = run(&Invocation {
        command: Command::GenerateMaps,
        settings_path: settings_path.clone(),
    })
    .unwrap();
    assert_eq!(summary.processed, 1);
    assert_eq!(summary.failed, 0);

    let floor = fs::read_to_string(project.path().join("collmaps/floor.map")).unwrap();
    assert!(floor.contains(" clip_missile 64 64 0 0 0 0 "));

    let listed = run(&Invocation {
        command: Command::ListMeshes,
        settings_path,
    })
    .unwrap();
    assert_eq!(listed.processed, 2);
}

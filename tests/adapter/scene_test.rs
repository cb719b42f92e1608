//! Tests for scene loading

use mesh_inspector::adapters::scene::{load_manifest, load_obj_objects};
use mesh_inspector::adapters::load_scene;
use mesh_inspector::core::models::{CheckOptions, ComponentRef, ObjectRef};
use mesh_inspector::core::ports::SceneQuery;
use mesh_inspector::core::services::CheckRegistry;

use crate::common::fixtures::{SCENE_MANIFEST, SCENE_OBJ, SceneDir};

#[test]
fn obj_models_become_objects() {
    let dir = SceneDir::new();
    let path = dir.write("props.obj", SCENE_OBJ);

    let objects = load_obj_objects(&path).unwrap();
    let names: Vec<_> = objects.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["crate_v001", "card_lamina"]);

    let cube = &objects[0];
    assert_eq!(cube.mesh.faces.len(), 6);
    assert_eq!(cube.mesh.triangle_count(), 12);
    assert_eq!(cube.mesh.uv_shell_count(), 1);
    assert_eq!(cube.history, vec!["crate_v001_import".to_string()]);

    let card = &objects[1];
    assert_eq!(card.mesh.triangle_count(), 4);
    assert!(!card.mesh.has_uvs());
    assert_eq!(card.mesh.lamina_faces(), vec![0, 1]);
}

#[test]
fn obj_scene_answers_queries() {
    let dir = SceneDir::new();
    let scene = load_scene(&dir.write("props.obj", SCENE_OBJ)).unwrap();

    let card = ObjectRef::new("card_lamina");
    assert_eq!(
        scene.lamina_faces(&card).unwrap(),
        vec![ComponentRef::new("card_lamina.f[0]"), ComponentRef::new("card_lamina.f[1]")]
    );
    assert_eq!(scene.uv_shell_count(&card).unwrap(), 0);
    assert_eq!(scene.history_len(&ObjectRef::new("crate_v001")).unwrap(), 1);
}

#[test]
fn unnamed_obj_geometry_takes_file_stem() {
    let dir = SceneDir::new();
    let path = dir.write("pebble_v001.obj", "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n");
    let objects = load_obj_objects(&path).unwrap();
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].name.as_str(), "pebble_v001");
}

#[test]
fn manifest_mixes_inline_and_obj_sources() {
    let dir = SceneDir::new();
    dir.write("props.obj", SCENE_OBJ);
    let path = dir.write("scene.toml", SCENE_MANIFEST);

    let objects = load_manifest(&path).unwrap();
    assert_eq!(objects.len(), 2);

    let rock = &objects[0];
    assert_eq!(rock.name.as_str(), "rock_v002");
    assert_eq!(rock.history_len(), 3);
    assert_eq!(rock.mesh.uv_shell_count(), 2);

    // Both OBJ models merged into one mesh
    let imported = &objects[1];
    assert_eq!(imported.name.as_str(), "imported_v001");
    assert_eq!(imported.mesh.triangle_count(), 16);
    assert_eq!(imported.history_len(), 1);
}

#[test]
fn directory_skips_obj_files_owned_by_a_manifest() {
    let dir = SceneDir::new();
    dir.write("props.obj", SCENE_OBJ);
    dir.write("scene.toml", SCENE_MANIFEST);
    dir.write("extra/pebble_v001.obj", "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n");
    dir.write("notes.txt", "not a scene file");

    let scene = load_scene(dir.path()).unwrap();
    let names: Vec<_> = scene.objects().iter().map(|o| o.as_str().to_string()).collect();
    assert_eq!(names, vec!["pebble_v001", "rock_v002", "imported_v001"]);
}

#[test]
fn unmapped_model_after_mapped_model_has_no_uvs() {
    let dir = SceneDir::new();
    let path = dir.write(
        "pair.obj",
        "\
o mapped_v001
v 0 0 0
v 1 0 0
v 0 1 0
vt 0 0
vt 1 0
vt 0 1
f 1/1 2/2 3/3
o bare_v001
v 2 0 0
v 3 0 0
v 2 1 0
f 4 5 6
",
    );

    let scene = load_scene(&path).unwrap();
    assert_eq!(scene.uv_shell_count(&ObjectRef::new("mapped_v001")).unwrap(), 1);
    assert_eq!(scene.uv_shell_count(&ObjectRef::new("bare_v001")).unwrap(), 0);
    assert!(!scene.get("bare_v001").unwrap().mesh.has_uvs());

    let objects = vec![ObjectRef::new("mapped_v001"), ObjectRef::new("bare_v001")];
    let report = CheckRegistry::builtin()
        .run("missing_uv_shells", &scene, &objects, &CheckOptions::new())
        .unwrap();
    let failed: Vec<_> = report.iter().map(|d| d.object.as_str()).collect();
    assert_eq!(failed, vec!["bare_v001"]);
}

#[test]
fn material_split_models_merge_back() {
    let dir = SceneDir::new();
    dir.write("mats.mtl", "newmtl red\nKd 1 0 0\nnewmtl blue\nKd 0 0 1\n");
    let path = dir.write(
        "tile_v001.obj",
        "mtllib mats.mtl\no tile_v001\nv 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\n\
         usemtl red\nf 1 2 3\nusemtl blue\nf 1 3 4\n",
    );

    let objects = load_obj_objects(&path).unwrap();
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].name.as_str(), "tile_v001");
    assert_eq!(objects[0].mesh.faces.len(), 2);
    assert!(objects[0].mesh.validate().is_ok());
}

#[test]
fn duplicate_names_across_files_are_namespaced() {
    let dir = SceneDir::new();
    dir.write("a.obj", SCENE_OBJ);
    dir.write("b.obj", SCENE_OBJ);

    let scene = load_scene(dir.path()).unwrap();
    let names: Vec<_> = scene.objects().iter().map(|o| o.as_str().to_string()).collect();
    assert_eq!(names, vec!["crate_v001", "card_lamina", "b:crate_v001", "b:card_lamina"]);
    assert_eq!(
        scene.lamina_faces(&ObjectRef::new("b:card_lamina")).unwrap(),
        vec![ComponentRef::new("b:card_lamina.f[0]"), ComponentRef::new("b:card_lamina.f[1]")]
    );
}

#[test]
fn duplicate_names_within_a_manifest_fail() {
    let dir = SceneDir::new();
    let path = dir.write(
        "twins.toml",
        "[[object]]\nname = \"twin\"\npositions = [[0.0, 0.0, 0.0]]\nfaces = []\n\n\
         [[object]]\nname = \"twin\"\npositions = [[0.0, 0.0, 0.0]]\nfaces = []\n",
    );
    assert!(load_scene(&path).is_err());
}

#[test]
fn missing_scene_is_an_error() {
    let dir = SceneDir::new();
    let err = load_scene(&dir.path().join("nothing.obj")).unwrap_err();
    assert!(err.to_string().contains("Scene not found"));
}

#[test]
fn unsupported_extension_is_an_error() {
    let dir = SceneDir::new();
    assert!(load_scene(&dir.write("model.fbx", "binary")).is_err());
}

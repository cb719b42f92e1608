//! Scene adapters
//!
//! - [`InMemoryScene`] - [`SceneQuery`](crate::core::ports::SceneQuery) over loaded meshes
//! - [`load_scene`] - Build a scene from an OBJ file, a TOML manifest or a directory

mod manifest;
mod memory;
mod obj;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

pub use manifest::{ManifestObject, SceneManifest, load_manifest};
pub use memory::{InMemoryScene, SceneObject};
pub use obj::{load_obj_mesh, load_obj_objects};

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

/// Load a scene from a path
///
/// - `*.obj`: every model becomes an object
/// - `*.toml`: a scene manifest
/// - directory: every OBJ and manifest below it, in path order; OBJ files a
///   manifest references are only loaded through that manifest. An object
///   whose name is already taken is loaded as `<file stem>:<name>`.
pub fn load_scene(path: &Path) -> anyhow::Result<InMemoryScene> {
    let mut scene = InMemoryScene::new();

    if path.is_dir() {
        for file in scene_files(path)? {
            load_file_into(&mut scene, &file, true)?;
        }
    } else if path.exists() {
        load_file_into(&mut scene, path, false)?;
    } else {
        anyhow::bail!("Scene not found: {}", path.display());
    }

    log::debug!("Scene {} has {} object(s)", path.display(), scene.len());
    Ok(scene)
}

fn load_file_into(scene: &mut InMemoryScene, path: &Path, namespaced: bool) -> anyhow::Result<()> {
    let objects = if has_extension(path, "obj") {
        load_obj_objects(path)?
    } else if has_extension(path, "toml") {
        load_manifest(path)?
    } else {
        anyhow::bail!("Unsupported scene file: {}", path.display());
    };

    for mut object in objects {
        if namespaced && scene.get(object.name.as_str()).is_some() {
            let stem = path.file_stem().unwrap_or_default().to_string_lossy();
            let renamed = format!("{stem}:{}", object.name);
            log::warn!("{} is already in the scene, loading it from {} as {renamed}", object.name, path.display());
            object.name = renamed.into();
        }
        scene.insert(object)?;
    }
    Ok(())
}

fn scene_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut objs = Vec::new();
    let mut manifests = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if has_extension(&path, "obj") {
            objs.push(path);
        } else if has_extension(&path, "toml") {
            manifests.push(path);
        }
    }

    let mut referenced = HashSet::new();
    for manifest in &manifests {
        let base_dir = manifest.parent().unwrap_or(dir);
        referenced.extend(SceneManifest::read(manifest)?.sources(base_dir));
    }

    let mut files: Vec<PathBuf> = objs.into_iter().filter(|p| !referenced.contains(p)).collect();
    files.extend(manifests);
    files.sort();
    Ok(files)
}

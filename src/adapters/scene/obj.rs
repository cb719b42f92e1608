//! Wavefront OBJ loading
//!
//! Faces are kept as authored (no triangulation) with separate position and
//! UV indices, so n-gons and UV seams survive the import.
//!
//! tobj fills in a texture index for every face once a file has any `vt`
//! line, so models whose faces carry no `vt` would look mapped. The face
//! records are scanned first and such models are loaded without UVs.

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::mesh::PolyMesh;

use super::memory::SceneObject;

/// Name tobj gives to geometry outside any `o`/`g` statement
const UNNAMED_OBJECT: &str = "unnamed_object";

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        triangulate: false,
        single_index: false,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    }
}

/// Split a flat index list by face arity
///
/// tobj leaves `face_arities` empty when every face is a triangle.
fn split_faces(indices: &[u32], arities: &[u32]) -> Vec<Vec<u32>> {
    if arities.is_empty() {
        return indices.chunks(3).map(<[u32]>::to_vec).collect();
    }

    let mut faces = Vec::with_capacity(arities.len());
    let mut rest = indices;
    for &arity in arities {
        let (face, tail) = rest.split_at((arity as usize).min(rest.len()));
        faces.push(face.to_vec());
        rest = tail;
    }
    faces
}

/// For every polygon record, in file order, whether all its vertices carry a
/// texture index
///
/// Records with fewer than 3 vertices are points and lines, which the loader
/// drops.
fn textured_faces(source: &str) -> Vec<bool> {
    source
        .lines()
        .filter_map(|line| {
            let mut words = line.split_whitespace();
            if !matches!(words.next(), Some("f" | "l")) {
                return None;
            }
            let vertices: Vec<&str> = words.collect();
            (vertices.len() >= 3).then(|| {
                vertices.iter().all(|v| v.split('/').nth(1).is_some_and(|vt| !vt.is_empty()))
            })
        })
        .collect()
}

fn face_count(mesh: &tobj::Mesh) -> usize {
    if mesh.face_arities.is_empty() {
        mesh.indices.len() / 3
    } else {
        mesh.face_arities.len()
    }
}

fn convert(mesh: &tobj::Mesh, textured: bool) -> PolyMesh {
    let positions = mesh.positions.chunks_exact(3).map(|p| [p[0], p[1], p[2]]).collect();
    let faces = split_faces(&mesh.indices, &mesh.face_arities);
    let poly = PolyMesh::new(positions, faces);

    if !textured || mesh.texcoord_indices.is_empty() {
        return poly;
    }
    let uvs = mesh.texcoords.chunks_exact(2).map(|t| [t[0], t[1]]).collect();
    let face_uvs = split_faces(&mesh.texcoord_indices, &mesh.face_arities);
    poly.with_uvs(uvs, face_uvs)
}

fn file_stem(path: &Path) -> String {
    path.file_stem().map_or_else(|| "object".to_string(), |s| s.to_string_lossy().into_owned())
}

/// Load the models of an OBJ file as named meshes, in file order
///
/// Models sharing a name (tobj splits an object on material changes) are
/// merged back into one mesh.
fn read_meshes(path: &Path) -> anyhow::Result<Vec<(String, PolyMesh)>> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read OBJ file: {}", path.display()))?;
    let textured = textured_faces(&source);

    let (models, materials) = tobj::load_obj(path, &load_options())
        .with_context(|| format!("Failed to load OBJ file: {}", path.display()))?;
    if let Err(e) = materials {
        log::debug!("Ignoring materials of {}: {e}", path.display());
    }

    let mut meshes: Vec<(String, PolyMesh)> = Vec::with_capacity(models.len());
    let mut cursor = 0;
    for model in &models {
        let end = (cursor + face_count(&model.mesh)).min(textured.len());
        let mapped = textured[cursor.min(end)..end].iter().any(|&t| t);
        cursor = end;

        let mesh = convert(&model.mesh, mapped);
        match meshes.iter_mut().find(|(name, _)| *name == model.name) {
            Some((_, merged)) => append(merged, mesh)?,
            None => meshes.push((model.name.clone(), mesh)),
        }
    }
    Ok(meshes)
}

/// Load every model of an OBJ file as a scene object
///
/// Unnamed geometry takes the file stem as its name. Each object gets a
/// single import node as history.
pub fn load_obj_objects(path: &Path) -> anyhow::Result<Vec<SceneObject>> {
    let meshes = read_meshes(path)?;
    let stem = file_stem(path);

    let mut objects = Vec::with_capacity(meshes.len());
    for (name, mesh) in meshes {
        let name = if name.is_empty() || name == UNNAMED_OBJECT { stem.clone() } else { name };
        mesh.validate().with_context(|| format!("Invalid mesh {name} in {}", path.display()))?;
        let history = format!("{name}_import");
        objects.push(SceneObject::new(name, mesh).with_history([history]));
    }

    log::debug!("Loaded {} object(s) from {}", objects.len(), path.display());
    Ok(objects)
}

/// Load an OBJ file as one mesh, merging all of its models
pub fn load_obj_mesh(path: &Path) -> anyhow::Result<PolyMesh> {
    let mut merged = PolyMesh::default();
    for (_, mesh) in read_meshes(path)? {
        append(&mut merged, mesh)?;
    }
    merged.validate().with_context(|| format!("Invalid mesh in {}", path.display()))?;
    Ok(merged)
}

fn offset(count: usize) -> anyhow::Result<u32> {
    u32::try_from(count).context("mesh too large")
}

fn append(target: &mut PolyMesh, mesh: PolyMesh) -> anyhow::Result<()> {
    let vertex_offset = offset(target.positions.len())?;
    let uv_offset = offset(target.uvs.len())?;

    // Keep face_uvs parallel to faces when only some models are mapped
    if mesh.has_uvs() != target.has_uvs() && !target.faces.is_empty() {
        log::warn!("Merging mapped and unmapped geometry drops the UV mapping");
        target.uvs.clear();
        target.face_uvs.clear();
        target.positions.extend(mesh.positions);
        target.faces.extend(shifted(mesh.faces, vertex_offset));
        return Ok(());
    }

    target.positions.extend(mesh.positions);
    target.faces.extend(shifted(mesh.faces, vertex_offset));
    target.uvs.extend(mesh.uvs);
    target.face_uvs.extend(shifted(mesh.face_uvs, uv_offset));
    Ok(())
}

fn shifted(faces: Vec<Vec<u32>>, by: u32) -> impl Iterator<Item = Vec<u32>> {
    faces.into_iter().map(move |f| f.into_iter().map(|i| i + by).collect())
}

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use dow2_obj::encode::{self, geometry, material};
use dow2_obj::io::json::load_model;
use dow2_obj::prelude::*;

const FILE_NAME: &str = "marine";

fn marine() -> Model {
    let file = File::open(format!("tests/data/{}.json", FILE_NAME)).unwrap();
    load_model(file).unwrap()
}

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ..Default::default()
    }
}

/// Rebuilds every triangle of a tobj model as a list of corner positions.
fn triangles(mesh: &tobj::Mesh) -> Vec<[[f32; 3]; 3]> {
    let position = |idx: u32| {
        let i = idx as usize * 3;
        [mesh.positions[i], mesh.positions[i + 1], mesh.positions[i + 2]]
    };
    mesh.indices.chunks(3)
        .map(|tri| [position(tri[0]), position(tri[1]), position(tri[2])])
        .collect()
}

fn expected_triangles(mesh: &SubMesh) -> Vec<[[f32; 3]; 3]> {
    mesh.indices.chunks(3)
        .map(|tri| tri.iter()
            .map(|&idx| mesh.vertices[idx as usize].position)
            .collect::<Vec<_>>()
            .try_into()
            .unwrap()
        )
        .collect()
}

#[test]
fn dump_reads_back_with_tobj() {
    let model = marine();
    let cfg = Config::default().with_texture_root("textures").with_texture_ext(".dds");

    let mut obj = String::new();
    let mut mtl = String::new();
    dump(&model, "marine.mtl", &mut obj, &mut mtl, &cfg).unwrap();

    let (models, materials) = tobj::load_obj_buf(&mut obj.as_bytes(), &load_options(), |_| {
        tobj::load_mtl_buf(&mut mtl.as_bytes())
    }).unwrap();
    let materials = materials.unwrap();

    assert_eq!(models.len(), 2);
    assert_eq!(models[0].name, "armour");
    assert_eq!(models[1].name, "helmet");
    for (loaded, source) in models.iter().zip(&model.sub_meshes) {
        assert_eq!(triangles(&loaded.mesh), expected_triangles(source));
    }

    let names = materials.iter().map(|m| m.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["space_marine.armour", "teamcolor.helmet"]);
    assert_eq!(models[0].mesh.material_id, Some(0));
    assert_eq!(models[1].mesh.material_id, Some(1));
}

#[test]
fn second_sub_mesh_uses_global_indices() {
    let model = marine();
    let mut obj = String::new();
    let mut mtl = String::new();
    dump(&model, "marine.mtl", &mut obj, &mut mtl, &Config::default()).unwrap();

    let faces = obj.lines()
        .map(str::trim)
        .filter(|line| line.starts_with("f "))
        .collect::<Vec<_>>();
    assert_eq!(faces, vec![
        "f 1/1/1 2/2/2 3/3/3",
        "f 1/1/1 3/3/3 4/4/4",
        "f 7/7/7 6/6/6 5/5/5",
    ]);
    assert_eq!(obj.lines().filter(|line| line.trim_start().starts_with("v ")).count(), 7);
}

#[test]
fn material_library_text() {
    let model = marine();
    let mut mtl = String::new();
    let cfg = Config::default().with_texture_ext(".dds");
    let written = encode::write_model_materials(&mut mtl, &model, &cfg.texture_options()).unwrap();
    assert_eq!(written, mtl.len());
    assert_eq!(mtl,
        "newmtl space_marine.armour\n\
         map_Kd art/marine_armour_dif.dds\n\
         map_d art/marine_armour_dif.dds\n\
         map_Bump art/marine_armour_nrm.dds\n\
         # Unsupported Team texture: art/marine_armour_tm.dds\n\
         newmtl teamcolor.helmet\n\
         map_Kd art/helmet_dif.dds\n\
         map_d art/helmet_dif.dds\n\
         map_Ks art/helmet_spc.dds\n"
    );
}

#[test]
fn files_next_to_each_other() {
    let dir = std::env::temp_dir().join("dow2-obj-tests");
    std::fs::create_dir_all(&dir).unwrap();
    let obj_path: PathBuf = dir.join(format!("{}.obj", FILE_NAME));
    let model = marine();

    let mut obj_writer = StreamWriter::new(BufWriter::new(File::create(&obj_path).unwrap()));
    let mtl_path = geometry::write_material_library_name(&mut obj_writer, &obj_path).unwrap();
    let num_vertices = geometry::write_model(&mut obj_writer, &model, true).unwrap();
    obj_writer.flush().unwrap();
    assert_eq!(mtl_path, dir.join(format!("{}.mtl", FILE_NAME)));
    assert_eq!(num_vertices, 7);

    let mut mtl_writer = StreamWriter::new(BufWriter::new(File::create(&mtl_path).unwrap()));
    let written = material::write_model_materials(&mut mtl_writer, &model, &Config::default().texture_options()).unwrap();
    mtl_writer.flush().unwrap();
    assert_eq!(written as u64, mtl_writer.bytes_written());

    let (models, materials) = tobj::load_obj(&obj_path, &load_options()).unwrap();
    assert_eq!(models.len(), 2);
    assert_eq!(materials.unwrap().len(), 2);
}

#[test]
fn unknown_texture_slot_aborts_the_dump() {
    let mut model = marine();
    model.materials[1].variables.push(MaterialVariable::texture("detailTex", "art/detail"));
    let mut obj = String::new();
    let mut mtl = String::new();
    let err = dump(&model, "marine.mtl", &mut obj, &mut mtl, &Config::default()).unwrap_err();
    assert!(err.to_string().contains("detailTex"), "{}", err);
    assert!(mtl.starts_with("newmtl space_marine.armour\n"));
}

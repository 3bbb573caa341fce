use cgmath::{Vector3, Zero};
use image::{DynamicImage, GrayImage, ImageFormat, RgbImage};
use treasure_terrain::{
    HeightGrid, HeightMapError, HeightMapSource, ImageLayout, ParametricLayout, build_mesh,
    data_structures::vertex::FLOATS_PER_VERTEX,
    terrain::{normals::estimate_normals, pack_vertices},
};

use crate::common::test_utils::{assert_vec3_eq, encode_png, is_unit_or_zero, mesh_normal};

mod common;

fn expected_index_count(width: u32, height: u32) -> usize {
    (2 * width * (height - 1) + 2 * height.saturating_sub(2)) as usize
}

#[test]
fn default_parametric_mesh_has_expected_buffer_sizes() {
    let mesh = build_mesh(&HeightMapSource::parametric()).unwrap();
    let n = ParametricLayout::SIZE_PER_SIDE;
    assert_eq!((mesh.width(), mesh.height()), (n, n));
    assert_eq!(mesh.vertex_data().len(), (n * n) as usize * FLOATS_PER_VERTEX);
    assert_eq!(mesh.index_count() as usize, expected_index_count(n, n));
    assert_eq!(mesh.vertex_bytes().len(), (n * n) as usize * 40);
    assert_eq!(mesh.index_bytes().len(), mesh.index_count() as usize * 2);
}

#[test]
fn parametric_colors_encode_grid_ratios() {
    let mesh = build_mesh(&HeightMapSource::Parametric(ParametricLayout::new(5, -1.0, 2.0))).unwrap();
    let vertices = mesh.vertices();
    assert_eq!(vertices[0].color, [0.0, 1.0, 0.5, 1.0]);
    assert_eq!(vertices[24].color, [1.0, 0.0, 0.5, 1.0]);
    assert_eq!(vertices[2].color, [0.5, 1.0, 0.5, 1.0]);
    // the default height function is the paraboloid
    assert_eq!(vertices[0].position, [-1.0, 0.2, -1.0]);
}

#[test]
fn flat_image_produces_upward_normals() {
    let png = encode_png(3, 3, |_, _| 0);
    let mesh = build_mesh(&HeightMapSource::image(&png)).unwrap();
    let layout = ImageLayout::default();
    for (i, vertex) in mesh.vertices().iter().enumerate() {
        assert_eq!(vertex.position[1], layout.height_offset);
        assert_eq!(vertex.color, layout.color);
        let (col, row) = (i as u32 % 3, i as u32 / 3);
        let normal = mesh_normal(&mesh, col, row);
        if col > 0 && row < 2 {
            assert_vec3_eq(normal, Vector3::unit_y());
        } else {
            assert_vec3_eq(normal, Vector3::zero());
        }
    }
}

#[test]
fn non_square_images_are_read_row_by_width() {
    let value = |col: u32, row: u32| ((row * 4 + col) * 10) as u8;
    let png = encode_png(4, 2, value);
    let mesh = build_mesh(&HeightMapSource::Image {
        bytes: &png,
        format: Some(ImageFormat::Png),
        layout: ImageLayout::default(),
    })
    .unwrap();
    assert_eq!((mesh.width(), mesh.height()), (4, 2));

    for row in 0..2 {
        for col in 0..4 {
            let position = mesh.vertices()[(row * 4 + col) as usize].position;
            let expected_y = (value(col, row) as f32 / 255.0) * -150.0 + 30.0;
            assert_eq!(position[0], 100.0 * col as f32 - 200.0);
            assert_eq!(position[1], expected_y);
            assert_eq!(position[2], 200.0 * row as f32 - 200.0);
        }
    }
}

#[test]
fn image_layout_controls_world_extent() {
    let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(2, 2, image::Luma([255])));
    let layout = ImageLayout {
        world_width: 10.0,
        world_depth: 4.0,
        height_scale: 2.0,
        height_offset: -1.0,
        color: [1.0, 0.0, 0.0, 1.0],
    };
    let mesh = build_mesh(&HeightMapSource::Decoded { image: &img, layout }).unwrap();
    let last = mesh.vertices()[3];
    assert_eq!(last.position, [0.0, 1.0, 0.0]);
    assert_eq!(mesh.vertices()[0].position, [-5.0, 1.0, -2.0]);
    assert_eq!(last.color, [1.0, 0.0, 0.0, 1.0]);
}

#[test]
fn image_height_comes_from_the_red_channel() {
    let mut img = RgbImage::from_pixel(2, 2, image::Rgb([255, 0, 0]));
    img.put_pixel(1, 1, image::Rgb([0, 255, 255]));
    let img = DynamicImage::ImageRgb8(img);
    let mesh = build_mesh(&HeightMapSource::Decoded {
        image: &img,
        layout: ImageLayout::default(),
    })
    .unwrap();

    // 255 / 255 * -150 + 30
    assert_eq!(mesh.vertices()[0].position[1], -120.0);
    assert_eq!(mesh.vertices()[2].position[1], -120.0);
    // green and blue are ignored
    assert_eq!(mesh.vertices()[3].position[1], 30.0);
}

#[test]
fn undecodable_image_is_a_resource_load_error() {
    let err = build_mesh(&HeightMapSource::image(b"definitely not a png")).unwrap_err();
    assert!(matches!(err, HeightMapError::ResourceLoad(_)));
    assert!(err.is_resource_load());

    let png = encode_png(2, 2, |_, _| 0);
    let err = build_mesh(&HeightMapSource::Image {
        bytes: &png,
        format: Some(ImageFormat::Jpeg),
        layout: ImageLayout::default(),
    })
    .unwrap_err();
    assert!(matches!(err, HeightMapError::ResourceLoad(_)));
}

#[test]
fn oversized_images_are_rejected() {
    let img = DynamicImage::ImageLuma8(GrayImage::new(257, 256));
    let err = build_mesh(&HeightMapSource::Decoded {
        image: &img,
        layout: ImageLayout::default(),
    })
    .unwrap_err();
    assert!(matches!(err, HeightMapError::TooManyVertices { .. }));
}

#[test]
fn builds_are_deterministic() {
    let png = encode_png(9, 7, |col, row| (col * 31 + row * 17) as u8);
    let first = build_mesh(&HeightMapSource::image(&png)).unwrap();
    let second = build_mesh(&HeightMapSource::image(&png)).unwrap();
    assert_eq!(first.vertex_bytes(), second.vertex_bytes());
    assert_eq!(first.index_bytes(), second.index_bytes());
}

#[test]
fn built_meshes_hold_the_invariants() {
    let png = encode_png(11, 6, |col, row| ((col * col + row * 40) % 256) as u8);
    let mesh = build_mesh(&HeightMapSource::image(&png)).unwrap();
    let len = mesh.width() * mesh.height();

    assert_eq!(mesh.vertex_data().len(), len as usize * FLOATS_PER_VERTEX);
    assert_eq!(mesh.index_count() as usize, expected_index_count(11, 6));
    assert!(mesh.indices().iter().all(|&i| (i as u32) < len));
    for vertex in mesh.vertices() {
        assert!(is_unit_or_zero(vertex.normal.into()));
    }
}

#[test]
fn two_by_two_mesh_has_four_indices() {
    let mesh = build_mesh(&HeightMapSource::Parametric(ParametricLayout::new(2, 0.0, 1.0))).unwrap();
    assert_eq!(mesh.index_count(), 4);
    assert_eq!(mesh.indices(), &[0, 2, 1, 3]);
}

#[test]
fn custom_height_function_is_sampled() {
    let layout = ParametricLayout::new(3, 0.0, 2.0).with_height_fn(|x, z| x + 10.0 * z);
    let mesh = build_mesh(&HeightMapSource::Parametric(layout)).unwrap();
    assert_eq!(mesh.vertices()[5].position, [2.0, 12.0, 1.0]);
}

#[test]
fn release_is_idempotent() {
    let mut mesh = build_mesh(&HeightMapSource::parametric()).unwrap();
    assert!(!mesh.is_released());
    mesh.release();
    assert!(mesh.is_released());
    assert_eq!(mesh.index_count(), 0);
    assert!(mesh.vertex_data().is_empty());
    mesh.release();
    assert!(mesh.is_released());
}

#[test]
fn mismatched_sample_counts_are_rejected() {
    let positions = vec![Vector3::zero(); 5];
    let colors = vec![[1.0; 4]; 6];
    let err = HeightGrid::from_positions(3, 2, positions, colors).unwrap_err();
    assert!(matches!(
        err,
        HeightMapError::SampleCount { what: "positions", expected: 6, actual: 5 }
    ));

    let err = HeightGrid::from_positions(3, 2, vec![Vector3::zero(); 6], vec![[1.0; 4]; 7]).unwrap_err();
    assert!(matches!(
        err,
        HeightMapError::SampleCount { what: "colors", expected: 6, actual: 7 }
    ));
}

#[test]
fn pack_vertices_needs_one_normal_per_sample() {
    let grid = HeightMapSource::Parametric(ParametricLayout::new(3, 0.0, 2.0)).to_grid().unwrap();
    let mut normals = estimate_normals(&grid);
    assert_eq!(pack_vertices(&grid, &normals).unwrap().len(), 9);

    normals.pop();
    let err = pack_vertices(&grid, &normals).unwrap_err();
    assert!(matches!(
        err,
        HeightMapError::SampleCount { what: "normals", expected: 9, actual: 8 }
    ));
}

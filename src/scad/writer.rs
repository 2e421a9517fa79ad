// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Node tree to OpenSCAD text

use super::points::index_faces;
use crate::ast::{Face, Node, TransformOp};
use crate::config::Config;
use std::fmt;
use std::path::Path;

/// One level of block indentation
pub const INDENT: &str = "    ";

/// Render `node` with an explicit configuration
pub fn render_with(node: &Node, config: &Config) -> String {
    match node {
        Node::Literal(text) => text.clone(),

        Node::List(children) => children
            .iter()
            .map(|child| render_with(child, config))
            .collect::<Vec<_>>()
            .join("\n"),

        Node::Cube { size, center } => {
            format!("cube([{}, {}, {}], {});", size.x, size.y, size.z, center)
        }

        Node::Sphere { r } => format!("sphere({}, $fn={});", r, config.resolution),

        Node::Cylinder {
            h,
            r_top,
            r_bottom,
            center,
        } => format!(
            "cylinder($fn = {}, {}, {}, {}, {});",
            config.resolution, h, r_bottom, r_top, center
        ),

        Node::Polyhedron(faces) => render_polyhedron(faces),

        Node::Union(children) => render_block("union()", children.iter(), config),

        Node::Difference { parent, children } => render_block(
            "difference()",
            std::iter::once(parent.as_ref()).chain(children.iter()),
            config,
        ),

        Node::Intersection(children) => render_block("intersection()", children.iter(), config),

        Node::Transform { op, content } => render_block(
            &format!("{}({})", op.keyword(), transform_params(op)),
            std::iter::once(content.as_ref()),
            config,
        ),

        Node::Import(path) => render_import(path, config),
    }
}

/// `head {`, every child line indented one level, then `};`
fn render_block<'a>(
    head: &str,
    children: impl Iterator<Item = &'a Node>,
    config: &Config,
) -> String {
    let mut out = format!("{} {{\n", head);

    for child in children {
        let text = render_with(child, config);
        if text.is_empty() {
            continue;
        }
        for line in text.split('\n') {
            if !line.is_empty() {
                out.push_str(INDENT);
                out.push_str(line);
            }
            out.push('\n');
        }
    }

    out.push_str("};");
    out
}

fn transform_params(op: &TransformOp) -> String {
    match op {
        TransformOp::Scale(v)
        | TransformOp::Resize(v)
        | TransformOp::Rotate(v)
        | TransformOp::Translate(v)
        | TransformOp::Mirror(v) => format!("[{}, {}, {}]", v.x, v.y, v.z),
        TransformOp::Color(c) => format!("[{}, {}, {}, {}]", c.r, c.g, c.b, c.a),
    }
}

fn render_polyhedron(faces: &[Face]) -> String {
    let indexed = index_faces(faces);

    let points = indexed
        .points
        .iter()
        .map(|p| format!("[{}, {}, {}]", p.x, p.y, p.z))
        .collect::<Vec<_>>()
        .join(", ");

    let faces = indexed
        .faces
        .iter()
        .map(|face| {
            let indices = face
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!("[{}]", indices)
        })
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::from("polyhedron(\n");
    push_section(&mut out, "points", &points);
    push_section(&mut out, "faces", &faces);
    out.push_str("convexity = 10);");
    out
}

fn push_section(out: &mut String, name: &str, body: &str) {
    out.push_str(INDENT);
    out.push_str(name);
    out.push_str(" = [\n");
    if !body.is_empty() {
        out.push_str(INDENT);
        out.push_str(INDENT);
        out.push_str(body);
        out.push('\n');
    }
    out.push_str(INDENT);
    out.push_str("],\n");
}

fn render_import(path: &Path, config: &Config) -> String {
    if path.to_str().is_none() {
        log::warn!(
            "import path {} is not valid UTF-8; invalid bytes become U+FFFD",
            path.display()
        );
    }
    let path = escape_string(&path.to_string_lossy());
    match config.import_convexity {
        Some(convexity) => format!("import(\"{}\", convexity = {});", path, convexity),
        None => format!("import(\"{}\");", path),
    }
}

/// Escape text for an OpenSCAD double-quoted string
pub fn escape_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders with the process-wide configuration
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_with(self, &crate::config::global()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{self, Point};

    fn render(node: &Node) -> String {
        render_with(node, &Config::default())
    }

    #[cfg(unix)]
    #[test]
    fn test_import_non_utf8_path_is_replaced() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"/models/part\xff.stl"));
        assert!(path.to_str().is_none());

        assert_eq!(
            render(&ast::import_exact(path)),
            "import(\"/models/part\u{FFFD}.stl\");"
        );
    }

    #[test]
    fn test_cube() {
        assert_eq!(render(&ast::cube(5.0, false)), "cube([5, 5, 5], false);");
        assert_eq!(
            render(&ast::cuboid(2.0, 3.0, 4.0, true)),
            "cube([3, 4, 2], true);"
        );
    }

    #[test]
    fn test_fractional_and_negative_numbers() {
        assert_eq!(render(&ast::sphere(0.5)), "sphere(0.5, $fn=50);");
        assert_eq!(render(&ast::sphere(-2.0)), "sphere(-2, $fn=50);");
    }

    #[test]
    fn test_cylinder_argument_order() {
        assert_eq!(
            render(&ast::cylinder(10.0, 1.0, 3.0, false)),
            "cylinder($fn = 50, 10, 3, 1, false);"
        );
    }

    #[test]
    fn test_literal_verbatim() {
        assert_eq!(render(&ast::literal("$fa = 12; {{{")), "$fa = 12; {{{");
    }

    #[test]
    fn test_list_joins_lines() {
        let node = ast::list([ast::literal("a();"), ast::literal("b();")]);
        assert_eq!(render(&node), "a();\nb();");
        assert_eq!(render(&ast::list([])), "");
    }

    #[test]
    fn test_union_block() {
        let node = ast::union(ast::cube(1.0, true), [ast::sphere(1.0)]);
        assert_eq!(
            render(&node),
            "union() {\n    cube([1, 1, 1], true);\n    sphere(1, $fn=50);\n};"
        );
    }

    #[test]
    fn test_nested_indentation() {
        let node = ast::cube(1.0, false).translated(1.0, 2.0, 3.0).rotated(0.0, 0.0, 45.0);
        assert_eq!(
            render(&node),
            "rotate([0, 0, 45]) {\n    translate([1, 2, 3]) {\n        cube([1, 1, 1], false);\n    };\n};"
        );
    }

    #[test]
    fn test_color_block() {
        let node = ast::sphere(1.0).colored(1.0, 0.5, 0.0, 1.0);
        assert_eq!(
            render(&node),
            "color([1, 0.5, 0, 1]) {\n    sphere(1, $fn=50);\n};"
        );
    }

    #[test]
    fn test_transform_with_several_subjects() {
        let node = ast::mirror(1.0, 0.0, 0.0, [ast::literal("a();"), ast::literal("b();")]);
        assert_eq!(render(&node), "mirror([1, 0, 0]) {\n    a();\n    b();\n};");
    }

    #[test]
    fn test_blank_lines_are_not_indented() {
        let node = ast::union(ast::literal("a();\n\nb();"), []);
        assert_eq!(render(&node), "union() {\n    a();\n\n    b();\n};");
    }

    #[test]
    fn test_empty_children_are_skipped() {
        let node = ast::union(ast::list([]), [ast::literal("a();")]);
        assert_eq!(render(&node), "union() {\n    a();\n};");
    }

    #[test]
    fn test_polyhedron_layout() {
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(1.0, 0.0, 0.0);
        let c = Point::new(0.0, 1.0, 0.0);
        let d = Point::new(0.0, 0.0, 1.0);
        let node = ast::polyhedron([
            Face::from([a, b, c]),
            Face::from([a, d, b]),
            Face::from([b, d, c]),
            Face::from([c, d, a]),
        ]);

        assert_eq!(
            render(&node),
            "polyhedron(\n    points = [\n        [0, 0, 0], [1, 0, 0], [0, 1, 0], [0, 0, 1]\n    ],\n    faces = [\n        [0, 1, 2], [0, 3, 1], [1, 3, 2], [2, 3, 0]\n    ],\nconvexity = 10);"
        );
    }

    #[test]
    fn test_empty_polyhedron() {
        assert_eq!(
            render(&ast::polyhedron([])),
            "polyhedron(\n    points = [\n    ],\n    faces = [\n    ],\nconvexity = 10);"
        );
    }

    #[test]
    fn test_import_escaping() {
        let node = ast::import_exact(r#"C:\models\"odd".stl"#);
        assert_eq!(render(&node), r#"import("C:\\models\\\"odd\".stl");"#);
    }

    #[test]
    fn test_import_convexity() {
        let node = ast::import_exact("/parts/base.stl");
        let config = Config {
            import_convexity: Some(5),
            ..Config::default()
        };
        assert_eq!(
            render_with(&node, &config),
            "import(\"/parts/base.stl\", convexity = 5);"
        );
    }

    #[test]
    fn test_resolution_is_read_at_render_time() {
        let node = ast::cylinder(1.0, 1.0, 1.0, true);
        let coarse = Config {
            resolution: 8,
            ..Config::default()
        };
        assert_eq!(
            render_with(&node, &coarse),
            "cylinder($fn = 8, 1, 1, 1, true);"
        );
    }
}

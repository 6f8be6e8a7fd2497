#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(err) = native::run() {
        eprintln!("shape_cli error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use morph_engine::catalog::{ShapeCatalog, ShapeDescriptor};
    use morph_engine::geom::ShapeMesh;
    use morph_engine::morph::{DisplayState, MorphPhase, TOTAL_MORPH_STEPS};
    use std::fs::{self, File};
    use std::io::{BufWriter, Write};
    use std::path::{Path, PathBuf};

    const USAGE: &str = r#"shape_cli (morph-engine)

USAGE:
  shape_cli list
  shape_cli info <shape-id>
  shape_cli search <query>
  shape_cli obj <shape-id|all> [options]
  shape_cli morph <from-id> <to-id> [options]

OPTIONS (obj):
  --resolution <n>   Sampling resolution (defaults to the shape's default)
  --out <path>       Write OBJ to this path (single shape only)
  --out-dir <dir>    Write <shape-id>.obj files to this dir (required for `all`)
  --overwrite        Overwrite existing output files

OPTIONS (morph):
  --resolution <n>   Sampling resolution for both shapes
  -h, --help         Show this help
"#;

    pub fn run() -> Result<(), String> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let mut args = Args::new(args);

        let Some(command) = args.next() else {
            print_usage();
            return Ok(());
        };

        match command.as_str() {
            "list" => {
                cmd_list();
                Ok(())
            }
            "info" => cmd_info(&mut args),
            "search" => cmd_search(&mut args),
            "obj" => cmd_obj(&mut args),
            "morph" => cmd_morph(&mut args),
            "-h" | "--help" | "help" => {
                print_usage();
                Ok(())
            }
            other => Err(format!("unknown command `{other}`\n\n{USAGE}")),
        }
    }

    fn print_usage() {
        println!("{USAGE}");
    }

    fn cmd_list() {
        let catalog = ShapeCatalog::default();
        for category in catalog.categories() {
            println!("{category}");
            for descriptor in catalog.by_category(category) {
                println!(
                    "  {:<16} {:<24} difficulty {}  {}",
                    descriptor.id,
                    descriptor.name,
                    descriptor.difficulty,
                    descriptor.generator.strategy_name()
                );
            }
        }
    }

    fn cmd_info(args: &mut Args) -> Result<(), String> {
        let id = args.next().ok_or("missing shape id")?;
        let catalog = ShapeCatalog::default();
        let descriptor = catalog
            .get(&id)
            .ok_or_else(|| unknown_shape(&catalog, &id))?;

        let range = descriptor.resolution_range;
        println!("id           {}", descriptor.id);
        println!("name         {}", descriptor.name);
        println!("category     {}", descriptor.category);
        println!("difficulty   {}", descriptor.difficulty);
        println!("strategy     {}", descriptor.generator.strategy_name());
        println!(
            "resolution   {}..{} (default {})",
            range.min, range.max, range.default
        );
        println!("tags         {}", descriptor.tags.join(", "));
        println!("description  {}", descriptor.description);

        let mesh = catalog
            .generate(descriptor.id, range.default)
            .map_err(|e| e.to_string())?;
        println!(
            "mesh         vertices={} triangles={} (at resolution {})",
            mesh.vertex_count(),
            mesh.triangle_count(),
            range.default
        );
        Ok(())
    }

    fn cmd_search(args: &mut Args) -> Result<(), String> {
        let query = args.next().ok_or("missing search query")?;
        let catalog = ShapeCatalog::default();
        let matches = catalog.search(&query);

        if matches.is_empty() {
            println!("no shapes match `{query}`");
            return Ok(());
        }
        for descriptor in matches {
            println!(
                "{:<16} {:<24} {}",
                descriptor.id, descriptor.name, descriptor.category
            );
        }
        Ok(())
    }

    fn cmd_obj(args: &mut Args) -> Result<(), String> {
        let shape_id = args.next().ok_or("missing shape id")?;

        let mut resolution: Option<i32> = None;
        let mut out_path: Option<PathBuf> = None;
        let mut out_dir: Option<PathBuf> = None;
        let mut overwrite = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--resolution" => {
                    let raw = args.value("--resolution")?;
                    let parsed = raw
                        .parse::<i32>()
                        .map_err(|_| format!("invalid resolution `{raw}`"))?;
                    resolution = Some(parsed);
                }
                "--out" => out_path = Some(PathBuf::from(args.value("--out")?)),
                "--out-dir" => out_dir = Some(PathBuf::from(args.value("--out-dir")?)),
                "--overwrite" => overwrite = true,
                "-h" | "--help" => {
                    print_usage();
                    return Ok(());
                }
                other => return Err(format!("unknown option `{other}`\n\n{USAGE}")),
            }
        }

        let catalog = ShapeCatalog::default();

        if let Some(dir) = out_dir.as_ref() {
            if out_path.is_some() {
                return Err("use either --out-dir or --out (not both)".to_string());
            }
            fs::create_dir_all(dir).map_err(|e| format!("create out dir: {e}"))?;

            if shape_id == "all" {
                for descriptor in catalog.all() {
                    write_shape_to_dir(&catalog, descriptor, resolution, dir, overwrite)?;
                }
                return Ok(());
            }

            let descriptor = catalog
                .get(&shape_id)
                .ok_or_else(|| unknown_shape(&catalog, &shape_id))?;
            return write_shape_to_dir(&catalog, descriptor, resolution, dir, overwrite);
        }

        if shape_id == "all" {
            return Err("`obj all` requires --out-dir".to_string());
        }

        let descriptor = catalog
            .get(&shape_id)
            .ok_or_else(|| unknown_shape(&catalog, &shape_id))?;
        let resolution = resolution.unwrap_or(descriptor.resolution_range.default);
        let mesh = catalog
            .generate(descriptor.id, resolution)
            .map_err(|e| e.to_string())?;

        let path = out_path.unwrap_or_else(|| PathBuf::from(format!("{}.obj", descriptor.id)));
        write_obj_file(&path, &mesh, descriptor.id, overwrite)?;
        eprintln!("wrote {}", path.display());
        eprintln!(
            "{}: vertices={} triangles={}",
            descriptor.id,
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        Ok(())
    }

    fn write_shape_to_dir(
        catalog: &ShapeCatalog,
        descriptor: &ShapeDescriptor,
        resolution: Option<i32>,
        dir: &Path,
        overwrite: bool,
    ) -> Result<(), String> {
        let resolution = resolution.unwrap_or(descriptor.resolution_range.default);
        let mesh = catalog
            .generate(descriptor.id, resolution)
            .map_err(|e| e.to_string())?;

        let path = dir.join(format!("{}.obj", descriptor.id));
        write_obj_file(&path, &mesh, descriptor.id, overwrite)?;
        eprintln!("wrote {}", path.display());
        eprintln!(
            "{}: vertices={} triangles={}",
            descriptor.id,
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        Ok(())
    }

    fn cmd_morph(args: &mut Args) -> Result<(), String> {
        let from = args.next().ok_or("missing source shape id")?;
        let to = args.next().ok_or("missing target shape id")?;

        let mut resolution: Option<i32> = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--resolution" => {
                    let raw = args.value("--resolution")?;
                    let parsed = raw
                        .parse::<i32>()
                        .map_err(|_| format!("invalid resolution `{raw}`"))?;
                    resolution = Some(parsed);
                }
                "-h" | "--help" => {
                    print_usage();
                    return Ok(());
                }
                other => return Err(format!("unknown option `{other}`\n\n{USAGE}")),
            }
        }

        let catalog = ShapeCatalog::default();
        for id in [from.as_str(), to.as_str()] {
            if catalog.get(id).is_none() {
                return Err(unknown_shape(&catalog, id));
            }
        }

        let from_res = resolve_resolution(&catalog, &from, resolution);
        let to_res = resolve_resolution(&catalog, &to, resolution);

        let mut display = DisplayState::new(&catalog);
        display
            .set_shape(&catalog, &from, from_res)
            .map_err(|e| e.to_string())?;
        display
            .request_morph(&catalog, &to, to_res)
            .map_err(|e| e.to_string())?;

        println!("morph `{from}` -> `{to}` over {TOTAL_MORPH_STEPS} ticks");
        println!("{:>4}  {:<10}  {:>8}  {:>8}", "tick", "phase", "source", "target");
        for step in 1..=TOTAL_MORPH_STEPS {
            let phase = display.tick();
            let target_scale = display
                .target()
                .map_or_else(|| "-".to_string(), |t| format!("{:.4}", t.scale));
            println!(
                "{step:>4}  {:<10}  {:>8.4}  {target_scale:>8}",
                phase.as_str(),
                display.current().scale
            );
            if phase == MorphPhase::Completed {
                break;
            }
        }
        println!("displaying `{}`", display.current().shape_id);
        Ok(())
    }

    fn resolve_resolution(catalog: &ShapeCatalog, id: &str, requested: Option<i32>) -> i32 {
        catalog.get(id).map_or(
            requested.unwrap_or(morph_engine::morph::DEFAULT_RESOLUTION),
            |descriptor| requested.unwrap_or(descriptor.resolution_range.default),
        )
    }

    fn unknown_shape(catalog: &ShapeCatalog, id: &str) -> String {
        match catalog.closest_id(id) {
            Some(suggestion) => {
                format!("unknown shape `{id}` (did you mean `{suggestion}`?); see `shape_cli list`")
            }
            None => format!("unknown shape `{id}`; see `shape_cli list`"),
        }
    }

    fn write_obj_file(
        path: &Path,
        mesh: &ShapeMesh,
        name: &str,
        overwrite: bool,
    ) -> Result<(), String> {
        mesh.validate()
            .map_err(|e| format!("mesh validation failed: {e}"))?;

        if path.exists() && !overwrite {
            return Err(format!(
                "refusing to overwrite existing file {} (use --overwrite)",
                path.display()
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("create dir {}: {e}", parent.display()))?;
        }

        let file = File::create(path).map_err(|e| format!("create {}: {e}", path.display()))?;
        let mut w = BufWriter::new(file);

        writeln!(w, "# morph-engine shape_cli").map_err(|e| format!("write obj: {e}"))?;
        writeln!(w, "o {name}").map_err(|e| format!("write obj: {e}"))?;

        for p in mesh.positions.iter().copied() {
            writeln!(w, "v {} {} {}", p[0], p[1], p[2]).map_err(|e| format!("write obj: {e}"))?;
        }

        if let Some(normals) = mesh.normals.as_ref() {
            for n in normals.iter().copied() {
                writeln!(w, "vn {} {} {}", n[0], n[1], n[2])
                    .map_err(|e| format!("write obj: {e}"))?;
            }
        }

        let has_normals = mesh.normals.is_some();
        for tri in mesh.indices.chunks_exact(3) {
            let a = tri[0] + 1;
            let b = tri[1] + 1;
            let c = tri[2] + 1;

            if has_normals {
                writeln!(w, "f {a}//{a} {b}//{b} {c}//{c}")
            } else {
                writeln!(w, "f {a} {b} {c}")
            }
            .map_err(|e| format!("write obj: {e}"))?;
        }

        w.flush().map_err(|e| format!("flush {}: {e}", path.display()))
    }

    struct Args {
        args: Vec<String>,
        pos: usize,
    }

    impl Args {
        fn new(args: Vec<String>) -> Self {
            Self { args, pos: 0 }
        }

        fn next(&mut self) -> Option<String> {
            let arg = self.args.get(self.pos)?.clone();
            self.pos += 1;
            Some(arg)
        }

        fn value(&mut self, flag: &str) -> Result<String, String> {
            self.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        }
    }
}

//! Shader source file loading

use crate::assets::AssetError;
use std::path::Path;

/// Read one shader stage's GLSL source from a file
///
/// The file is read in full as UTF-8. A trailing newline is appended when
/// missing so a source file without a final line terminator still compiles
/// cleanly on drivers that are picky about it.
pub fn load_shader_source<P: AsRef<Path>>(path: P) -> Result<String, AssetError> {
    let path_ref = path.as_ref();

    log::debug!("Loading shader source from: {:?}", path_ref);

    let mut source = std::fs::read_to_string(path_ref)?;
    if !source.ends_with('\n') {
        source.push('\n');
    }
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn appends_trailing_newline() {
        let path = std::env::temp_dir().join("gl_engine_shader_loader_test.vert");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "void main() {{}}").unwrap();
        drop(file);

        let source = load_shader_source(&path).unwrap();
        assert_eq!(source, "void main() {}\n");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_shader_source("no/such/shader.vert");
        assert!(matches!(result, Err(AssetError::IoError(_))));
    }
}

use std::path::Path;

use mage_forge::export;

pub fn run(file: &Path, output: Option<&Path>) -> Result<(), String> {
    let character = super::load_character(file)?;
    let content = export::to_plain_text(&character);

    match output {
        Some(path) => {
            let target = if path.is_dir() {
                path.join(export::file_name(&character))
            } else {
                path.to_path_buf()
            };
            super::write_file(&target, &content)?;
            println!("  Exported to {}", target.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}

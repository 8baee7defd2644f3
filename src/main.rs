mod icon;

use rayon::prelude::*;
use std::error::Error;

/// Icon sizes required by the web app manifest.
const SIZES: [u32; 2] = [192, 512];

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    // The two sizes share no state, so render and save them in parallel.
    SIZES
        .par_iter()
        .try_for_each(|&size| -> Result<(), Box<dyn Error + Send + Sync>> {
            let path = icon::icon_file_name(size);
            icon::render_icon(size).save(&path)?;
            println!("Saved {path}");
            Ok(())
        })?;
    Ok(())
}

use anyhow::Result;

/// Config sanity checks run by `navfix doctor` before going live.
pub fn check_source(kind: &str, device: Option<&str>, file: Option<&str>) -> Result<()> {
    match kind {
        "nmea-serial" => {
            anyhow::ensure!(
                device.map(|d| !d.is_empty()).unwrap_or(false),
                "gnss.nmea_device missing"
            )
        }
        "nmea-file" => {
            anyhow::ensure!(
                file.map(|f| !f.is_empty()).unwrap_or(false),
                "gnss.nmea_file missing"
            )
        }
        other => anyhow::bail!("unknown gnss.source: {}", other),
    }
    Ok(())
}

pub fn check_baud(baud: u32) -> Result<()> {
    anyhow::ensure!((1_200..=921_600).contains(&baud), "gnss.baud out of range");
    Ok(())
}

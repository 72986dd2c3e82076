use super::snapshot::GuildSnapshot;
use crate::core::constants::SAVE_VERSION_MAGIC;
use crate::core::GuildError;
use crate::guild::Guild;
use directories::ProjectDirs;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const MAGIC_LEN: usize = 8;
const LENGTH_LEN: usize = 4;
const CHECKSUM_LEN: usize = 32;

/// Saves and loads guild snapshots in a checksummed binary format.
///
/// File format:
/// - Version magic (8 bytes)
/// - Data length (4 bytes)
/// - bincode-encoded [`GuildSnapshot`] (variable length)
/// - SHA-256 over everything before it (32 bytes)
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Save location under the platform config directory, created if missing.
    pub fn new() -> Result<Self, GuildError> {
        let project_dirs = ProjectDirs::from("", "", "guildhall").ok_or(GuildError::NoSaveDirectory)?;
        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(Self {
            save_path: config_dir.join("guild.dat"),
        })
    }

    /// Save to an explicit file.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.save_path
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    pub fn save(&self, guild: &Guild) -> Result<(), GuildError> {
        save_to(&self.save_path, guild)
    }

    pub fn load(&self) -> Result<Guild, GuildError> {
        load_from(&self.save_path)
    }
}

/// Write a snapshot of the guild to `path`.
pub fn save_to(path: &Path, guild: &Guild) -> Result<(), GuildError> {
    let bytes = encode(&GuildSnapshot::capture(guild))?;
    fs::write(path, bytes)?;
    info!(path = %path.display(), day = guild.day, "guild saved");
    Ok(())
}

/// Read and verify a save file, then rebuild the guild from it.
pub fn load_from(path: &Path) -> Result<Guild, GuildError> {
    let bytes = fs::read(path)?;
    let snapshot = decode(&bytes).map_err(|e| {
        warn!(path = %path.display(), error = %e, "save rejected");
        e
    })?;
    Ok(snapshot.into_guild())
}

pub fn encode(snapshot: &GuildSnapshot) -> Result<Vec<u8>, GuildError> {
    let data = bincode::serialize(snapshot)?;
    let data_len = data.len() as u32;

    let mut out = Vec::with_capacity(MAGIC_LEN + LENGTH_LEN + data.len() + CHECKSUM_LEN);
    out.extend_from_slice(&SAVE_VERSION_MAGIC.to_le_bytes());
    out.extend_from_slice(&data_len.to_le_bytes());
    out.extend_from_slice(&data);
    let checksum = Sha256::digest(&out);
    out.extend_from_slice(&checksum);
    Ok(out)
}

pub fn decode(bytes: &[u8]) -> Result<GuildSnapshot, GuildError> {
    let (magic, rest) = split(bytes, MAGIC_LEN, "version")?;
    let mut version_bytes = [0u8; MAGIC_LEN];
    version_bytes.copy_from_slice(magic);
    let version = u64::from_le_bytes(version_bytes);
    if version != SAVE_VERSION_MAGIC {
        return Err(GuildError::VersionMismatch {
            expected: SAVE_VERSION_MAGIC,
            found: version,
        });
    }

    let (length, rest) = split(rest, LENGTH_LEN, "length")?;
    let mut length_bytes = [0u8; LENGTH_LEN];
    length_bytes.copy_from_slice(length);
    let data_len = u32::from_le_bytes(length_bytes) as usize;

    let (data, rest) = split(rest, data_len, "payload")?;
    let (stored, _) = split(rest, CHECKSUM_LEN, "checksum")?;

    let computed = Sha256::digest(&bytes[..MAGIC_LEN + LENGTH_LEN + data_len]);
    if stored != computed.as_slice() {
        return Err(GuildError::ChecksumMismatch);
    }

    Ok(bincode::deserialize(data)?)
}

fn split<'a>(bytes: &'a [u8], len: usize, what: &'static str) -> Result<(&'a [u8], &'a [u8]), GuildError> {
    if bytes.len() < len {
        return Err(GuildError::Truncated(what));
    }
    Ok(bytes.split_at(len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn snapshot() -> GuildSnapshot {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut guild = Guild::found("Ember Hall", &mut rng);
        guild.day = 12;
        guild.money = 4321;
        GuildSnapshot::capture(&guild)
    }

    #[test]
    fn test_encode_decode() {
        let original = snapshot();
        let bytes = encode(&original).unwrap();
        assert_eq!(&bytes[..8], &SAVE_VERSION_MAGIC.to_le_bytes());
        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_corrupted_payload_fails_checksum() {
        let mut bytes = encode(&snapshot()).unwrap();
        bytes[20] ^= 0xFF;
        assert!(matches!(decode(&bytes), Err(GuildError::ChecksumMismatch)));
    }

    #[test]
    fn test_wrong_magic_rejected() {
        let mut bytes = encode(&snapshot()).unwrap();
        bytes[0] ^= 0x01;
        assert!(matches!(decode(&bytes), Err(GuildError::VersionMismatch { .. })));
    }

    #[test]
    fn test_truncated_file() {
        let bytes = encode(&snapshot()).unwrap();
        assert!(matches!(decode(&bytes[..5]), Err(GuildError::Truncated("version"))));
        assert!(matches!(
            decode(&bytes[..bytes.len() - 1]),
            Err(GuildError::Truncated("checksum"))
        ));
    }

    #[test]
    fn test_load_nonexistent() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::at(dir.path().join("missing.dat"));
        assert!(!manager.save_exists());
        assert!(matches!(manager.load(), Err(GuildError::Io(_))));
    }
}

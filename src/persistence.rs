//! Moves encoded messages between memory and the file system.

use std::fs;
use std::path::Path;

use proto_codec::{Codec, Message};

use crate::errors::{Error, Result};

/// Writes `bytes` to `path`, creating or truncating the file.
pub fn write_to_file(path: impl AsRef<Path>, bytes: &[u8]) -> Result<()> {
  let path = path.as_ref();
  fs::write(path, bytes).map_err(|e| Error::io("write to", path, e))?;
  debug!("wrote {} bytes to {}", bytes.len(), path.display());
  Ok(())
}

/// Reads the whole content of `path`.
pub fn read_from_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
  let path = path.as_ref();
  let bytes = fs::read(path).map_err(|e| Error::io("read from", path, e))?;
  debug!("read {} bytes from {}", bytes.len(), path.display());
  Ok(bytes)
}

/// Encodes `message` in the binary representation and writes it to `path`.
pub fn write_message<C, M>(codec: &C, path: impl AsRef<Path>, message: &M) -> Result<()>
where
  C: Codec,
  M: Message,
{
  let bytes = codec.encode_binary(message)?;
  write_to_file(path, &bytes)
}

/// Reads `path` and decodes its content as a binary-encoded `M`.
pub fn read_message<C, M>(codec: &C, path: impl AsRef<Path>) -> Result<M>
where
  C: Codec,
  M: Message,
{
  let bytes = read_from_file(path)?;
  Ok(codec.decode_binary(&bytes)?)
}

use crate::comparator::Comparator;
use crate::error::Result;
use crate::skiplist::SkipMap;
use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

impl<K, V, C> SkipMap<K, V, C>
where
    K: Display,
    V: Display,
    C: Comparator<K>,
{
    /// Writes a human readable listing of the map to `writer`.
    ///
    /// Every node produces a line `[<ordinal>]\t<key> / <value>.\t<level count>` in ascending key
    /// order, followed by a summary line with the largest level count of any node.
    ///
    /// # Examples
    /// ```
    /// use ordered_skipmap::skiplist::{SkipMap, SkipMapConfig};
    ///
    /// let config = SkipMapConfig::default()
    ///     .with_max_level_count(1)
    ///     .with_level_promotion_percent(100);
    /// let mut map = SkipMap::with_config(config).unwrap();
    /// map.insert(2, 20);
    /// map.insert(1, 10);
    ///
    /// let mut buffer = Vec::new();
    /// map.write_dump(&mut buffer).unwrap();
    /// assert_eq!(
    ///     String::from_utf8(buffer).unwrap(),
    ///     "[0]\t1 / 10.\t1\n[1]\t2 / 20.\t1\nmaxLevelCount = 1\n",
    /// );
    /// ```
    pub fn write_dump<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        let mut max_level_count = 0;
        for (index, (key, value, levels)) in self.iter_with_levels().enumerate() {
            writeln!(writer, "[{}]\t{} / {}.\t{}", index, key, value, levels)?;
            if levels > max_level_count {
                max_level_count = levels;
            }
        }
        writeln!(writer, "maxLevelCount = {}", max_level_count)?;
        Ok(())
    }

    /// Writes the listing produced by `write_dump` to standard output.
    pub fn print_dump(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_dump(&mut handle)?;
        handle.flush()?;
        Ok(())
    }

    /// Writes the listing produced by `write_dump` to the file at `path`, creating it or
    /// truncating an existing file.
    ///
    /// # Errors
    ///
    /// Returns `Error::IOError` if the file cannot be created or written.
    pub fn dump_to_path<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_dump(&mut writer)?;
        writer.flush()?;
        info!("wrote {} entries to {}", self.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::skiplist::{SkipMap, SkipMapConfig};
    use std::fs;

    #[test]
    fn test_write_dump_empty() {
        let map: SkipMap<i32, i32> = SkipMap::new();
        let mut buffer = Vec::new();
        map.write_dump(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "maxLevelCount = 0\n");
    }

    #[test]
    fn test_write_dump() {
        let config = SkipMapConfig::default()
            .with_max_level_count(3)
            .with_level_promotion_percent(100);
        let mut map = SkipMap::with_config(config).unwrap();
        map.insert(4, 300);
        map.insert(2, 100);
        map.insert(-1, 200);

        let mut buffer = Vec::new();
        map.write_dump(&mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "[0]\t-1 / 200.\t3\n[1]\t2 / 100.\t3\n[2]\t4 / 300.\t3\nmaxLevelCount = 3\n",
        );
    }

    #[test]
    fn test_dump_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dump.txt");
        fs::write(&path, "stale contents that should be truncated\n").unwrap();

        let config = SkipMapConfig::default()
            .with_max_level_count(1)
            .with_level_promotion_percent(100);
        let mut map = SkipMap::with_config(config).unwrap();
        map.insert(5, 1);
        map.insert(5, 2);

        map.dump_to_path(&path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "[0]\t5 / 2.\t1\nmaxLevelCount = 1\n",
        );
    }

    #[test]
    fn test_dump_to_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("dump.txt");

        let mut map = SkipMap::new();
        map.insert(1, 1);
        match map.dump_to_path(&path) {
            Err(Error::IOError(_)) => {},
            _ => panic!("Expected an IOError."),
        }
    }
}

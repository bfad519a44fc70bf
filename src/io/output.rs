//! To describe dump of feature vectors.
//!
//! Vectors are written one per line in libsvm-like format : the graph identifier followed by
//! *dim:value* pairs in ascending dimension.
//! The reverse index, if requested, is written in another file as tab separated csv records, one per label :
//! graph identifier, dimension, label. Labels holding a tab, a quote or a newline are quoted by the csv writer
//! so the file can be read back with any csv reader.


use anyhow::anyhow;
use csv::WriterBuilder;

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};

use crate::corpus::Extraction;
use crate::error::SigResult;
use crate::hasher::{FeatureVector, ReverseIndex};


/// only libsvm now.
#[derive(Copy, Clone, Debug)]
pub enum Format {
    LIBSVM,
}

pub struct Output {
    /// describe output format
    fmt : Format,
    /// name of output file, stdout if None
    output_name : Option<String>,
    /// name of reverse index file. Reverse index is collected only if set
    fmap_name : Option<String>,
}

impl Output {
    pub fn new(fmt : Format, output_name : &Option<String>, fmap_name : &Option<String>) -> Self {
        Output{fmt, output_name : output_name.clone(), fmap_name : fmap_name.clone()}
    }
    /// get ouput format
    pub fn get_fmt(&self) -> Format { self.fmt }

    /// get output_name
    pub fn get_output_name(&self) -> Option<&String> { self.output_name.as_ref() }

    /// get reverse index file name
    pub fn get_fmap_name(&self) -> Option<&String> { self.fmap_name.as_ref() }

    /// do we need a reverse index
    pub fn wants_reverse_index(&self) -> bool { self.fmap_name.is_some() }

    /// dumps vectors (and reverse index) of all successful extractions, returns the number of vectors written
    pub fn dump(&self, results : &[(String, SigResult<Extraction>)]) -> anyhow::Result<usize> {
        let out : Box<dyn Write> = match &self.output_name {
            Some(name) => Box::new(open_write(name)?),
            None => Box::new(std::io::stdout()),
        };
        let mut out = BufWriter::new(out);
        let mut fmap = match &self.fmap_name {
            Some(name) => Some(BufWriter::new(open_write(name)?)),
            None => None,
        };
        //
        let mut nb_written = 0;
        for (id, res) in results {
            let extraction = match res {
                Ok(extraction) => extraction,
                Err(e) => {
                    log::error!("graph {} skipped in dump : {}", id, e);
                    continue;
                }
            };
            match self.fmt {
                Format::LIBSVM => write_libsvm(&mut out, id, &extraction.vector)?,
            }
            if let (Some(fmap), Some(index)) = (fmap.as_mut(), extraction.reverse_index.as_ref()) {
                write_reverse_index(fmap, id, index)?;
            }
            nb_written += 1;
        }
        out.flush()?;
        if let Some(mut fmap) = fmap {
            fmap.flush()?;
        }
        log::info!("dumped {} vectors out of {}", nb_written, results.len());
        Ok(nb_written)
    } // end of dump

}  // end of Output


impl Default for Output {
    fn default() -> Self {
        Output{fmt : Format::LIBSVM, output_name : None, fmap_name : None}
    }
}


fn open_write(name : &str) -> anyhow::Result<std::fs::File> {
    let fileres = OpenOptions::new().write(true).create(true).truncate(true).open(name);
    if fileres.is_err() {
        log::error!("Output : could not open file {:?}", name);
        return Err(anyhow!("Output could not open file {}", name));
    }
    Ok(fileres?)
}


/// writes one line : id dim:value dim:value ...
pub fn write_libsvm<W : Write>(out : &mut W, id : &str, vector : &FeatureVector) -> std::io::Result<()> {
    write!(out, "{}", id)?;
    match vector {
        FeatureVector::Counts(v) => {
            for (dim, w) in v.iter() {
                write!(out, " {}:{}", dim, w)?;
            }
        }
        FeatureVector::Reals(v) => {
            for (dim, w) in v.iter() {
                write!(out, " {}:{}", dim, w)?;
            }
        }
    }
    writeln!(out)
} // end of write_libsvm


/// writes one tab separated record per label : id dim label
pub fn write_reverse_index<W : Write>(out : &mut W, id : &str, index : &ReverseIndex) -> csv::Result<()> {
    let mut wtr = WriterBuilder::new().delimiter(b'\t').has_headers(false).from_writer(out);
    for (dim, labels) in index {
        let dim = dim.to_string();
        for label in labels {
            wtr.write_record([id, dim.as_str(), label.as_str()])?;
        }
    }
    wtr.flush()?;
    Ok(())
} // end of write_reverse_index



#[cfg(test)]
mod tests {

use super::*;
use crate::bag::Bag;
use crate::hasher::hash_bag;

#[test]
fn libsvm_lines() {
    // with 4 bits "f1" goes to dim 1 with sign -1, "B" (0xcca66a8a) to dim 10 with sign +1
    let bag : Bag<i64> = vec![("B".to_string(), 2), ("f1".to_string(), 3)].into_iter().collect();
    let (v, index) = hash_bag(&bag, 4, true).unwrap();
    let mut buf = Vec::<u8>::new();
    write_libsvm(&mut buf, "g0", &FeatureVector::Counts(v)).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "g0 1:-3 10:2\n");
    //
    let mut buf = Vec::<u8>::new();
    write_reverse_index(&mut buf, "g0", &index.unwrap()).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "g0\t1\tf1\ng0\t10\tB\n");
}


#[test]
fn reverse_index_labels_with_blanks() {
    let mut index = ReverseIndex::new();
    index.entry(15).or_default().insert("operator new".to_string());
    index.entry(15).or_default().insert("free".to_string());
    index.entry(3).or_default().insert("a\tb".to_string());
    let mut buf = Vec::<u8>::new();
    write_reverse_index(&mut buf, "g1", &index).unwrap();
    //
    let mut rdr = csv::ReaderBuilder::new().delimiter(b'\t').has_headers(false).from_reader(buf.as_slice());
    let records : Vec<Vec<String>> = rdr.records()
        .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
        .collect();
    assert_eq!(records, vec![
        vec!["g1", "3", "a\tb"],
        vec!["g1", "15", "free"],
        vec!["g1", "15", "operator new"],
    ]);
} // end of reverse_index_labels_with_blanks

#[test]
fn dump_to_files() {
    let dir = std::env::temp_dir();
    let out_name = dir.join(format!("graphsig_out_{}.txt", std::process::id())).display().to_string();
    let fmap_name = dir.join(format!("graphsig_fmap_{}.txt", std::process::id())).display().to_string();
    let output = Output::new(Format::LIBSVM, &Some(out_name.clone()), &Some(fmap_name.clone()));
    assert!(output.wants_reverse_index());
    //
    let bag : Bag<f64> = vec![("f1".to_string(), 1.5)].into_iter().collect();
    let (v, index) = hash_bag(&bag, 4, true).unwrap();
    let ok = Extraction{vector : FeatureVector::Reals(v), reverse_index : index, nb_features : 1};
    let failed = Err(crate::error::SigError::InvalidMode(9));
    let results = vec![("a".to_string(), Ok(ok)), ("b".to_string(), failed)];
    assert_eq!(output.dump(&results).unwrap(), 1);
    assert_eq!(std::fs::read_to_string(&out_name).unwrap(), "a 1:-1.5\n");
    assert_eq!(std::fs::read_to_string(&fmap_name).unwrap(), "a\t1\tf1\n");
    let _ = std::fs::remove_file(&out_name);
    let _ = std::fs::remove_file(&fmap_name);
}

}  // end of mod tests

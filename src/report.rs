/*!
 * Report assembly
 *
 * Drives the walker, renders every file it reports and joins the blocks
 * into the single string that ends up on the clipboard.
 */

use std::fmt;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::renderer::render_file;
use crate::types::{DirectoryVisit, FileRecord};
use crate::utils::format_file_size;
use crate::walker::{DirectoryWalker, WalkError};

/// Ordered file blocks collected from one walk
#[derive(Debug, Default)]
pub struct Report {
    /// Blocks in traversal order
    pub records: Vec<FileRecord>,
}

impl Report {
    /// Number of blocks in the report
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the walk found no files at all
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of blocks that carry an error instead of file contents
    pub fn unreadable_count(&self) -> usize {
        self.records.iter().filter(|r| !r.is_readable()).count()
    }

    /// Render the report: blocks separated by a single blank line
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

/// Builds a report from a directory tree
#[derive(Debug, Default, Clone, Copy)]
pub struct ReportBuilder;

impl ReportBuilder {
    /// Create a new report builder
    pub fn new() -> Self {
        Self
    }

    /// Walk `root` and render every file found
    ///
    /// Only a failure to list `root` itself is returned as an error. A
    /// subdirectory that cannot be listed is logged and skipped, and files
    /// that cannot be read show up as error blocks.
    pub fn build(&self, root: &Path) -> Result<Report> {
        let report = self.assemble(DirectoryWalker::new(root))?;

        info!(
            "Collected {} files from {} ({} unreadable)",
            report.len(),
            root.display(),
            report.unreadable_count()
        );

        Ok(report)
    }

    /// Render the files of every visit, in order
    pub fn assemble<I>(&self, visits: I) -> Result<Report>
    where
        I: IntoIterator<Item = std::result::Result<DirectoryVisit, WalkError>>,
    {
        let mut report = Report::default();

        for visit in visits {
            let visit = match visit {
                Ok(visit) => visit,
                Err(e) if e.is_root => return Err(e.into()),
                Err(e) => {
                    warn!("{}", e);
                    continue;
                }
            };

            for name in &visit.files {
                debug!("Rendering {}", visit.path.join(name).display());
                report.records.push(render_file(&visit.path, name));
            }
        }

        Ok(report)
    }

    /// Walk `root` and return the rendered report string
    pub fn build_string(&self, root: &Path) -> Result<String> {
        let rendered = self.build(root)?.render();
        debug!("Report size: {}", format_file_size(rendered.len() as u64));
        Ok(rendered)
    }
}

pub mod discovery;
pub mod error;
pub mod extract;
pub mod filename;
pub mod index_text;

pub use discovery::{
    DEFAULT_INDEX_PAGE, DRAWING_EXTENSIONS, FolderScan, decode_file_list, decode_list_positions,
    find_index_page, parse_file_list, read_file_list, scan_folder,
};
pub use error::{IngestError, Result};
pub use extract::{IMAGE_EXTENSIONS, SystemExtractor, TEXT_EXTENSIONS, TextExtractor};
pub use filename::decode_filename;
pub use index_text::{NOISE_PHRASES, parse_index_line, parse_index_text, title_case};

#![allow(dead_code)]

//! Trivial in-memory patch producers shared by the integration tests.

use git_unidiff::{Chunk, File, FileMode, FilePatch, ObjectId, Operation, Patch};

pub struct TestPatch {
    pub message: &'static str,
    pub file_patches: Vec<TestFilePatch>,
}

impl Patch for TestPatch {
    type FilePatch = TestFilePatch;

    fn message(&self) -> &str {
        self.message
    }

    fn file_patches(&self) -> &[TestFilePatch] {
        &self.file_patches
    }
}

#[derive(Default)]
pub struct TestFilePatch {
    pub from: Option<TestFile>,
    pub to: Option<TestFile>,
    pub chunks: Vec<TestChunk>,
}

impl FilePatch for TestFilePatch {
    type File = TestFile;
    type Chunk = TestChunk;

    fn files(&self) -> (Option<&TestFile>, Option<&TestFile>) {
        (self.from.as_ref(), self.to.as_ref())
    }

    /// A file patch without chunks is binary, as upstream producers
    /// signal it
    fn is_binary(&self) -> bool {
        self.chunks.is_empty()
    }

    fn chunks(&self) -> &[TestChunk] {
        &self.chunks
    }
}

pub struct TestFile {
    pub path: &'static str,
    pub mode: FileMode,
    pub seed: &'static str,
}

impl File for TestFile {
    fn path(&self) -> &str {
        self.path
    }

    fn mode(&self) -> FileMode {
        self.mode
    }

    /// Real blob id of the seed content, as the object store would
    /// compute it
    fn hash(&self) -> ObjectId {
        let oid = git2::Oid::hash_object(git2::ObjectType::Blob, self.seed.as_bytes())
            .expect("hash blob");
        let bytes: [u8; 20] = oid.as_bytes().try_into().expect("20-byte oid");
        ObjectId::from_bytes(bytes)
    }
}

pub struct TestChunk {
    pub content: &'static str,
    pub op: Operation,
}

impl Chunk for TestChunk {
    fn content(&self) -> &str {
        self.content
    }

    fn operation(&self) -> Operation {
        self.op
    }
}

pub fn file(path: &'static str, mode: FileMode, seed: &'static str) -> TestFile {
    TestFile { path, mode, seed }
}

pub fn chunk(op: Operation, content: &'static str) -> TestChunk {
    TestChunk { content, op }
}

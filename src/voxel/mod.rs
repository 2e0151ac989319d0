// ============================================
// Voxel Module - Воксельные буферы
// ============================================
// Генератор только пишет в буфер через трейт VoxelBuffer.
// VoxelArea - плотный ограниченный бокс, SparseVoxels - расширяемый.

mod pos;
mod buffer;
mod sparse;

pub use pos::BlockPos;
pub use buffer::{VoxelArea, VoxelBuffer};
pub use sparse::SparseVoxels;

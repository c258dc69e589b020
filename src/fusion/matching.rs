use std::path::PathBuf;
use crate::fusion::config::BySource;
use crate::fusion::index::FileIndex;
/// A recording found in every source tree.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchedRecording {
    pub id: String,
    pub paths: BySource<PathBuf>,
}
/// Ids present in all three indexes, in ascending order.
pub fn common_ids(indexes: &BySource<FileIndex>) -> Vec<String> {
    indexes
        .pos
        .ids()
        .filter(|id| indexes.physnet.contains(id) && indexes.effphys.contains(id))
        .map(str::to_owned)
        .collect()
}
pub fn match_recordings(indexes: &BySource<FileIndex>) -> Vec<MatchedRecording> {
    common_ids(indexes)
        .into_iter()
        .filter_map(|id| match indexes.map(|_, index| index.get(&id).cloned()) {
            BySource {
                pos: Some(pos),
                physnet: Some(physnet),
                effphys: Some(effphys),
            } => Some(MatchedRecording {
                id,
                paths: BySource {
                    pos,
                    physnet,
                    effphys,
                },
            }),
            // common_ids only yields ids every index holds
            _ => None,
        })
        .collect()
}

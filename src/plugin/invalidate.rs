//! Hot-update handling.

use super::Plugin;
use crate::host::{DevServer, HotUpdateContext, HotUpdateOutcome};
use crate::module::VirtualId;

impl Plugin {
    /// Hot-update hook.
    ///
    /// Always requests a full reload: restyling tends to touch the whole
    /// page. If the changed file has a virtual stylesheet module in the
    /// graph, that module is invalidated and returned so the host
    /// recompiles it instead of serving stale CSS.
    pub fn handle_hot_update<S: DevServer>(
        &self,
        ctx: &HotUpdateContext<'_, S>,
    ) -> HotUpdateOutcome<S::Module> {
        ctx.server.send_full_reload();

        let id = VirtualId::for_importer(&self.options.scheme, ctx.file);
        match ctx.server.module_by_id(id.as_str()) {
            Some(module) => {
                log::debug!("invalidating {id}");
                ctx.server.invalidate_module(&module);
                HotUpdateOutcome::Modules(vec![module])
            }
            None => HotUpdateOutcome::Default,
        }
    }
}

//! Deploy Use Case
//!
//! Runs one deployment, strictly in this order:
//! 1. Run the local pre-deploy commands (best effort)
//! 2. Build the release archive
//! 3. Upload the archive and the bootstrap script
//! 4. Invoke the bootstrap script over HTTP
//! 5. Delete the bootstrap script from the disk
//! 6. Upload the configured extra files
//! 7. Remove the local archive
//!
//! Any error except a failed local cleanup stops the run at the stage where
//! it happened. Nothing is rolled back: a failure after step 4 can leave the
//! server purged without the new release.

use std::sync::Arc;

use crate::domain::entities::{
    invocation_url, script_remote_path, Archive, ExecutionLog, ARCHIVE_NAME,
};
use crate::domain::ports::{
    ArchiveRequest, Archiver, CommandRunner, DeployEvent, DeployEventSink, DeployStage,
    FileSystem, NoopEventSink, RemoteDisk, RemoteInvoker,
};
use crate::error::{FerryError, FerryResult};

use super::options::DeployPlan;
use super::result::DeployResult;

/// Deploy use case - orchestrates the deployment flow
///
/// Parameterized by its ports so tests can swap every side effect.
pub struct DeployUseCase<FS, D, I, R, A>
where
    FS: FileSystem,
    D: RemoteDisk,
    I: RemoteInvoker,
    R: CommandRunner,
    A: Archiver,
{
    file_system: FS,
    disk: D,
    invoker: I,
    runner: R,
    archiver: A,
}

impl<FS, D, I, R, A> DeployUseCase<FS, D, I, R, A>
where
    FS: FileSystem,
    D: RemoteDisk,
    I: RemoteInvoker,
    R: CommandRunner,
    A: Archiver,
{
    pub fn new(file_system: FS, disk: D, invoker: I, runner: R, archiver: A) -> Self {
        Self {
            file_system,
            disk,
            invoker,
            runner,
            archiver,
        }
    }

    /// Execute the deployment silently
    pub fn execute(&self, plan: &DeployPlan) -> FerryResult<DeployResult> {
        self.execute_with_events(plan, Arc::new(NoopEventSink))
    }

    /// Execute the deployment, narrating every stage to `sink`
    pub fn execute_with_events(
        &self,
        plan: &DeployPlan,
        sink: Arc<dyn DeployEventSink>,
    ) -> FerryResult<DeployResult> {
        let sink = sink.as_ref();
        let mut result = DeployResult::new();

        sink.on_event(DeployEvent::Started {
            server: plan.server.clone(),
            destination: self.disk.display_name(),
            refresh: plan.refresh(),
        });

        self.stage(sink, DeployStage::RunBefore, || {
            self.run_before(plan, sink, &mut result);
            Ok(())
        })?;

        let archive = self.stage(sink, DeployStage::BuildArchive, || {
            self.build_archive(plan, sink)
        })?;

        self.stage(sink, DeployStage::UploadArtifacts, || {
            self.upload_artifacts(plan, &archive, sink, &mut result)
        })?;

        self.stage(sink, DeployStage::InvokeRemoteScript, || {
            self.invoke(plan, sink, &mut result)
        })?;

        self.stage(sink, DeployStage::DeleteRemoteScript, || {
            self.delete_script(sink)
        })?;

        self.stage(sink, DeployStage::UploadExtraFiles, || {
            self.upload_extra_files(plan, sink, &mut result)
        })?;

        self.stage(sink, DeployStage::CleanupLocal, || {
            self.cleanup(&archive, sink, &mut result);
            Ok(())
        })?;

        result.archive = Some(archive);
        sink.on_event(DeployEvent::Completed {
            uploaded_count: result.uploaded.len(),
            remote_log_lines: result.remote_log.len(),
            warning_count: result.warning_count(),
        });
        Ok(result)
    }

    fn stage<T>(
        &self,
        sink: &dyn DeployEventSink,
        stage: DeployStage,
        run: impl FnOnce() -> FerryResult<T>,
    ) -> FerryResult<T> {
        tracing::debug!(stage = stage.as_str(), "stage started");
        sink.on_event(DeployEvent::StageStarted { stage });
        run().inspect_err(|err| {
            tracing::debug!(stage = stage.as_str(), error = %err, "stage failed");
            sink.on_event(DeployEvent::Failed {
                stage,
                error: err.to_string(),
            });
        })
    }

    fn run_before(&self, plan: &DeployPlan, sink: &dyn DeployEventSink, result: &mut DeployResult) {
        for command in &plan.before {
            sink.on_event(DeployEvent::CommandStarted {
                command: command.clone(),
            });
            let outcome = self.runner.run(command, &plan.project_root);
            if !outcome.is_success() {
                tracing::warn!(command = %command, ?outcome, "pre-deploy command failed");
                result.failed_commands.push(command.clone());
                sink.on_event(DeployEvent::CommandFailed {
                    command: command.clone(),
                    outcome,
                });
            }
        }
    }

    fn build_archive(&self, plan: &DeployPlan, sink: &dyn DeployEventSink) -> FerryResult<Archive> {
        if self.file_system.is_file(&plan.archive_path) {
            self.file_system
                .remove(&plan.archive_path)
                .map_err(|e| FerryError::ArchiveCreation {
                    message: format!(
                        "cannot remove previous archive {}: {}",
                        plan.archive_path.display(),
                        e
                    ),
                })?;
        }

        let archive = self.archiver.build(&ArchiveRequest {
            root: &plan.project_root,
            includes: &plan.includes,
            excludes: &plan.excludes,
            destination: &plan.archive_path,
        })?;

        sink.on_event(DeployEvent::ArchiveBuilt {
            path: archive.path().to_path_buf(),
            entries: archive.entry_count(),
            size: archive.size(),
            digest: archive.digest().to_string(),
        });
        Ok(archive)
    }

    fn upload_artifacts(
        &self,
        plan: &DeployPlan,
        archive: &Archive,
        sink: &dyn DeployEventSink,
        result: &mut DeployResult,
    ) -> FerryResult<()> {
        for (path, bytes) in self.prepare_artifacts(plan, archive)? {
            self.put(&path, &bytes, sink, result)?;
        }
        Ok(())
    }

    /// Archive and script bytes, in upload order
    ///
    /// Everything is read and rendered before the first put, so a failure
    /// here leaves the disk untouched.
    fn prepare_artifacts(
        &self,
        plan: &DeployPlan,
        archive: &Archive,
    ) -> FerryResult<Vec<(String, Vec<u8>)>> {
        let script = plan.bootstrap_script().render()?;
        let bytes = self
            .file_system
            .read(archive.path())
            .map_err(|e| FerryError::Upload {
                path: ARCHIVE_NAME.to_string(),
                message: e.to_string(),
            })?;
        Ok(vec![
            (ARCHIVE_NAME.to_string(), bytes),
            (script_remote_path(), script.into_bytes()),
        ])
    }

    fn invoke(
        &self,
        plan: &DeployPlan,
        sink: &dyn DeployEventSink,
        result: &mut DeployResult,
    ) -> FerryResult<()> {
        let url = invocation_url(&plan.deploy_url, ARCHIVE_NAME);
        sink.on_event(DeployEvent::RemoteInvoked { url: url.clone() });

        let body = self
            .invoker
            .trigger(&url)
            .map_err(|e| FerryError::RemoteInvocation {
                url: url.clone(),
                message: e.to_string(),
            })?;

        if !plan.debug {
            tracing::debug!(bytes = body.len(), "remote script answered");
            return Ok(());
        }

        let log = ExecutionLog::parse(&body).map_err(|e| FerryError::RemoteInvocation {
            url: url.clone(),
            message: format!("response is not a JSON execution log: {}", e),
        })?;
        for line in log.lines() {
            sink.on_event(DeployEvent::RemoteLog { line: line.clone() });
        }
        result.remote_log = log.lines().to_vec();
        Ok(())
    }

    fn delete_script(&self, sink: &dyn DeployEventSink) -> FerryResult<()> {
        let path = script_remote_path();
        self.disk.delete(&path).map_err(|e| FerryError::Upload {
            path: path.clone(),
            message: e.to_string(),
        })?;
        sink.on_event(DeployEvent::RemoteDeleted { path });
        Ok(())
    }

    fn upload_extra_files(
        &self,
        plan: &DeployPlan,
        sink: &dyn DeployEventSink,
        result: &mut DeployResult,
    ) -> FerryResult<()> {
        for upload in &plan.uploads {
            let local = plan.project_root.join(&upload.local);
            let bytes = self
                .file_system
                .read(&local)
                .map_err(|e| FerryError::Upload {
                    path: upload.remote.clone(),
                    message: e.to_string(),
                })?;
            self.put(&upload.remote, &bytes, sink, result)?;
        }
        Ok(())
    }

    fn cleanup(&self, archive: &Archive, sink: &dyn DeployEventSink, result: &mut DeployResult) {
        if let Err(e) = self.file_system.remove(archive.path()) {
            let err = FerryError::LocalCleanup {
                path: archive.path().to_path_buf(),
                message: e.to_string(),
            };
            tracing::warn!(error = %err, "local cleanup failed");
            result.warnings.push(err.to_string());
            sink.on_event(DeployEvent::Warning {
                message: err.to_string(),
            });
        }
    }

    fn put(
        &self,
        path: &str,
        bytes: &[u8],
        sink: &dyn DeployEventSink,
        result: &mut DeployResult,
    ) -> FerryResult<()> {
        self.disk.put(path, bytes).map_err(|e| FerryError::Upload {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        tracing::debug!(path, bytes = bytes.len(), "uploaded");
        result.uploaded.push(path.to_string());
        sink.on_event(DeployEvent::Uploaded {
            path: path.to_string(),
            bytes: bytes.len(),
        });
        Ok(())
    }
}

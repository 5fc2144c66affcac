// src/executors/python.rs
use async_trait::async_trait;
use pyo3::exceptions::{PyException, PyKeyboardInterrupt, PySystemExit};
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyInt};

use super::CodeExecutor;
use crate::config::InterpreterConfig;
use crate::errors::ExecutionFault;
use crate::program::SubmittedProgram;

/// Runs programs on a CPython interpreter embedded in the runner process.
///
/// The program shares the process's working directory, environment and file
/// descriptors, and executes in the `__main__` namespace.
pub struct EmbeddedPythonExecutor {
    config: InterpreterConfig,
}

impl EmbeddedPythonExecutor {
    pub fn new(config: InterpreterConfig) -> Self {
        Self { config }
    }
}

impl Default for EmbeddedPythonExecutor {
    fn default() -> Self {
        Self::new(InterpreterConfig::default())
    }
}

#[async_trait]
impl CodeExecutor for EmbeddedPythonExecutor {
    fn language(&self) -> &'static str {
        "python"
    }

    /// Runs on the calling thread. The interpreter's notion of the main thread
    /// is the thread that first initializes it, and `shutdown` has to happen
    /// there too.
    async fn execute(&self, program: &SubmittedProgram) -> Result<(), ExecutionFault> {
        run_on_interpreter(program.as_bytes(), &self.config)
    }

    /// Finalize the interpreter: join non-daemon threads, run `atexit`
    /// handlers, and flush file objects the program left open.
    fn shutdown(&self) {
        // SAFETY: the interpreter is never touched again after finalization,
        // and the GIL state acquired here is intentionally not released.
        unsafe {
            if pyo3::ffi::Py_IsInitialized() == 0 {
                return;
            }
            pyo3::ffi::PyGILState_Ensure();
            if pyo3::ffi::Py_FinalizeEx() < 0 {
                log::warn!("Interpreter finalization reported an error");
            }
        }
    }
}

fn run_on_interpreter(source: &[u8], config: &InterpreterConfig) -> Result<(), ExecutionFault> {
    Python::with_gil(|py| {
        let result = exec_source(py, source, config).map_err(|err| {
            let fault = classify(py, &err);
            if matches!(
                fault,
                ExecutionFault::Aborted(_) | ExecutionFault::Interrupted(_)
            ) {
                err.print(py);
            }
            fault
        });

        // Program output has to reach fd 1/2 before the status line does.
        flush_std_streams(py);
        result
    })
}

fn exec_source(py: Python<'_>, source: &[u8], config: &InterpreterConfig) -> PyResult<()> {
    let sys = py.import("sys")?;
    sys.setattr("argv", vec!["-"])?;

    let builtins = py.import("builtins")?;
    let text = PyBytes::new(py, source).call_method1("decode", (config.source_encoding.as_str(),))?;
    let code = builtins
        .getattr("compile")?
        .call1((text, config.filename.as_str(), "exec"))?;

    let globals = py.import("__main__")?.dict();
    builtins.getattr("exec")?.call1((code, globals))?;
    Ok(())
}

fn classify(py: Python<'_>, err: &PyErr) -> ExecutionFault {
    if err.is_instance_of::<PySystemExit>(py) {
        return ExecutionFault::Exited(exit_status(py, err));
    }

    let message = exception_message(py, err);
    if err.is_instance_of::<PyException>(py) {
        ExecutionFault::Raised(message)
    } else if err.is_instance_of::<PyKeyboardInterrupt>(py) {
        ExecutionFault::Interrupted(message)
    } else {
        ExecutionFault::Aborted(message)
    }
}

fn exception_message(py: Python<'_>, err: &PyErr) -> String {
    match err.value(py).str() {
        Ok(text) => text.to_string_lossy().into_owned(),
        Err(_) => "<exception str() failed>".to_string(),
    }
}

/// Status for `SystemExit`, following the interpreter's own rules: `None`
/// is success, an integer is truncated to a C `int` (-1 when it does not fit
/// a C `long`), anything else is printed to stderr and mapped to 1.
fn exit_status(py: Python<'_>, err: &PyErr) -> i32 {
    let code = match err.value(py).getattr("code") {
        Ok(code) => code,
        Err(_) => return 1,
    };

    if code.is_none() {
        return 0;
    }
    if code.is_instance_of::<PyInt>() {
        return match code.extract::<i64>() {
            Ok(status) => status as i32,
            Err(_) => -1,
        };
    }

    if let Ok(text) = code.str() {
        let rendered = text.to_string_lossy().into_owned();
        let _ = py.import("sys").and_then(|sys| {
            let stderr = sys.getattr("stderr")?;
            stderr.call_method1("write", (format!("{}\n", rendered),))?;
            Ok(())
        });
    }
    1
}

fn flush_std_streams(py: Python<'_>) {
    let Ok(sys) = py.import("sys") else {
        return;
    };
    for name in ["stdout", "stderr"] {
        if let Ok(stream) = sys.getattr(name) {
            if !stream.is_none() {
                let _ = stream.call_method0("flush");
            }
        }
    }
}

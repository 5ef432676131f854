//! User-facing strings.

pub const SUBMIT_CREATE_LABEL: &str = "Agregar Producto";
pub const SUBMIT_UPDATE_LABEL: &str = "Actualizar Producto";
pub const CANCEL_EDIT_LABEL: &str = "Cancelar";
pub const EDIT_LABEL: &str = "Editar";
pub const DELETE_LABEL: &str = "Eliminar";
pub const RETRY_LABEL: &str = "Reintentar";

pub const EMPTY_LIST: &str = "No hay productos disponibles";
pub const LIST_UNAVAILABLE: &str = "No se pudieron cargar los productos";

pub const INVALID_CREDENTIALS: &str = "Credenciales inválidas";
pub const CONFIRM_DELETE: &str = "¿Eliminar este producto?";
pub const DELETE_FAILED: &str = "Error al eliminar el producto";
pub const SAVE_FAILED: &str = "Error al guardar el producto";

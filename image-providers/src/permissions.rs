//! Runtime permission for reading the device's media storage.
//!
//! On Android the storage read permission is requested through JNI against
//! the hosting activity. Other platforms have no runtime permission model,
//! so everything reports granted.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    Granted,
    Denied,
}

/// Current state of the media read permission, without prompting the user.
pub fn check_media_permission() -> PermissionState {
    #[cfg(target_os = "android")]
    {
        android::check().unwrap_or(PermissionState::Denied)
    }

    #[cfg(not(target_os = "android"))]
    {
        PermissionState::Granted
    }
}

/// Requests the media read permission, prompting the user if necessary.
pub async fn request_media_permission() -> PermissionState {
    #[cfg(target_os = "android")]
    {
        match tokio::task::spawn_blocking(android::request_blocking).await {
            Ok(state) => state,
            Err(e) => {
                log::error!("Permission request task failed: {}", e);
                PermissionState::Denied
            }
        }
    }

    #[cfg(not(target_os = "android"))]
    {
        PermissionState::Granted
    }
}

#[cfg(target_os = "android")]
mod android {
    use super::PermissionState;
    use jni::objects::{JObject, JValue};

    const MEDIA_PERMISSIONS: [&str; 2] = [
        "android.permission.READ_MEDIA_IMAGES",
        "android.permission.READ_EXTERNAL_STORAGE",
    ];
    const PERMISSION_GRANTED: i32 = 0;
    const REQUEST_CODE: i32 = 101;

    pub fn check() -> Option<PermissionState> {
        unsafe {
            let ctx = ndk_context::android_context();
            let vm = jni::JavaVM::from_raw(ctx.vm().cast()).ok()?;
            let mut env = vm.attach_current_thread().ok()?;
            let activity = JObject::from_raw(ctx.context().cast());

            for permission in MEDIA_PERMISSIONS {
                let name = env.new_string(permission).ok()?;
                let result = env
                    .call_method(
                        &activity,
                        "checkSelfPermission",
                        "(Ljava/lang/String;)I",
                        &[JValue::Object(&JObject::from(name))],
                    )
                    .ok()?
                    .i()
                    .ok()?;
                if result == PERMISSION_GRANTED {
                    return Some(PermissionState::Granted);
                }
            }
            Some(PermissionState::Denied)
        }
    }

    pub fn request_blocking() -> PermissionState {
        if check() == Some(PermissionState::Granted) {
            return PermissionState::Granted;
        }
        if launch_request().is_none() {
            return PermissionState::Denied;
        }

        // A denial leaves checkSelfPermission negative, so the poll runs
        // into the timeout.
        for _ in 0..300 {
            std::thread::sleep(std::time::Duration::from_millis(100));
            if check() == Some(PermissionState::Granted) {
                return PermissionState::Granted;
            }
        }
        PermissionState::Denied
    }

    fn launch_request() -> Option<()> {
        unsafe {
            let ctx = ndk_context::android_context();
            let vm = jni::JavaVM::from_raw(ctx.vm().cast()).ok()?;
            let mut env = vm.attach_current_thread().ok()?;
            let activity = JObject::from_raw(ctx.context().cast());

            let string_class = env.find_class("java/lang/String").ok()?;
            let empty = env.new_string("").ok()?;
            let array = env
                .new_object_array(MEDIA_PERMISSIONS.len() as i32, string_class, &empty)
                .ok()?;
            for (i, permission) in MEDIA_PERMISSIONS.iter().enumerate() {
                let name = env.new_string(permission).ok()?;
                env.set_object_array_element(&array, i as i32, &name).ok()?;
            }

            env.call_method(
                &activity,
                "requestPermissions",
                "([Ljava/lang/String;I)V",
                &[
                    JValue::Object(&JObject::from(array)),
                    JValue::Int(REQUEST_CODE),
                ],
            )
            .ok()?;
            Some(())
        }
    }
}

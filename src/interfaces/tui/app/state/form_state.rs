//! 表单状态管理
//!
//! 管理添加应用时的表单输入和提交状态

use crate::registry::AppCredentials;
use crate::services::RegistrationCandidate;

/// 当前正在编辑的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditingField {
    #[default]
    ServerUrl,
    AppName,
    AppId,
    MasterKey,
}

impl EditingField {
    /// 所有字段的顺序
    pub const ALL: [Self; 4] = [Self::ServerUrl, Self::AppName, Self::AppId, Self::MasterKey];

    /// 切换到下一个字段
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|x| x == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// 切换到上一个字段
    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|x| x == self).unwrap_or(0);
        if idx == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[idx - 1]
        }
    }

    /// 获取字段显示标题
    pub fn display_title(&self) -> &'static str {
        match self {
            Self::ServerUrl => "Server URL",
            Self::AppName => "App Name",
            Self::AppId => "Application ID",
            Self::MasterKey => "Master Key",
        }
    }
}

/// 表单更新消息，每个字段一个变体
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    SetServerUrl(String),
    SetAppName(String),
    SetAppId(String),
    SetMasterKey(String),
    /// 向当前字段追加字符
    PushChar(char),
    /// 删除当前字段最后一个字符
    PopChar,
    NextField,
    PrevField,
}

impl FormMessage {
    /// 替换指定字段的整个值
    pub fn set(field: EditingField, value: String) -> Self {
        match field {
            EditingField::ServerUrl => Self::SetServerUrl(value),
            EditingField::AppName => Self::SetAppName(value),
            EditingField::AppId => Self::SetAppId(value),
            EditingField::MasterKey => Self::SetMasterKey(value),
        }
    }
}

/// 提交状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// 探测请求进行中，禁止再次提交
    Submitting,
    Done,
}

/// 表单状态
#[derive(Debug, Default)]
pub struct FormState {
    pub server_url: String,
    pub app_name: String,
    pub app_id: String,
    pub master_key: String,
    /// 当前编辑的字段
    pub currently_editing: Option<EditingField>,
    pub submission: SubmissionState,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 重新打开表单：清空输入并预填服务器地址
    pub fn open(&mut self, default_server_url: &str) {
        self.clear();
        self.server_url = default_server_url.to_string();
        self.currently_editing = Some(EditingField::ServerUrl);
    }

    /// 清空所有输入并回到 Idle
    pub fn clear(&mut self) {
        self.clear_inputs();
        self.submission = SubmissionState::Idle;
    }

    fn clear_inputs(&mut self) {
        self.server_url.clear();
        self.app_name.clear();
        self.app_id.clear();
        self.master_key.clear();
        self.currently_editing = None;
    }

    pub fn update(&mut self, message: FormMessage) {
        // 提交进行中时输入被冻结
        if self.is_submitting() {
            return;
        }

        match message {
            FormMessage::SetServerUrl(value) => self.server_url = value,
            FormMessage::SetAppName(value) => self.app_name = value,
            FormMessage::SetAppId(value) => self.app_id = value,
            FormMessage::SetMasterKey(value) => self.master_key = value,
            // 按键编辑也归结为整字段替换
            FormMessage::PushChar(c) => {
                if let Some(field) = self.currently_editing {
                    let mut value = self.value(field).to_string();
                    value.push(c);
                    self.update(FormMessage::set(field, value));
                }
            }
            FormMessage::PopChar => {
                if let Some(field) = self.currently_editing {
                    let mut value = self.value(field).to_string();
                    value.pop();
                    self.update(FormMessage::set(field, value));
                }
            }
            FormMessage::NextField => {
                self.currently_editing = Some(match self.currently_editing {
                    Some(field) => field.next(),
                    None => EditingField::default(),
                });
            }
            FormMessage::PrevField => {
                self.currently_editing = Some(match self.currently_editing {
                    Some(field) => field.prev(),
                    None => EditingField::MasterKey,
                });
            }
        }
    }

    /// 获取指定字段的值
    pub fn value(&self, field: EditingField) -> &str {
        match field {
            EditingField::ServerUrl => &self.server_url,
            EditingField::AppName => &self.app_name,
            EditingField::AppId => &self.app_id,
            EditingField::MasterKey => &self.master_key,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::Submitting
    }

    /// Idle -> Submitting；只有 Idle 状态可以提交，Done 需要重新打开表单
    pub fn begin_submit(&mut self) -> bool {
        if self.submission != SubmissionState::Idle {
            return false;
        }
        self.submission = SubmissionState::Submitting;
        true
    }

    /// Submitting -> Done，输入被清空；`open` 之前保持 Done
    pub fn finish_submit(&mut self) {
        self.clear_inputs();
        self.submission = SubmissionState::Done;
    }

    /// 当前输入对应的注册候选
    pub fn candidate(&self) -> RegistrationCandidate {
        RegistrationCandidate::new(
            self.app_name.clone(),
            AppCredentials::new(
                self.server_url.clone(),
                self.app_id.clone(),
                self.master_key.clone(),
            ),
        )
    }
}

//! Expected contents of the pt-BR catalog

/// Every key path of the pt-BR catalog with its translation
pub const PT_BR_ENTRIES: &[(&str, &str)] = &[
    ("header.title", "DevBr - Desenvolvimento Brasil"),
    ("header.subtitle", "Agente de IA para desenvolvimento full-stack"),
    ("header.starOnGitHub", "⭐ GitHub"),
    ("header.userMenu", "Menu do usuário"),
    ("header.settings", "Configurações e Uso"),
    ("header.logout", "Sair"),
    ("actions.download", "Baixar Código"),
    ("actions.share", "Compartilhar"),
    ("actions.deploy", "Publicar"),
    ("actions.newProject", "Novo projeto"),
    ("actions.save", "Salvar"),
    ("actions.cancel", "Cancelar"),
    ("actions.close", "Fechar"),
    ("actions.copy", "Copiar"),
    ("actions.edit", "Editar"),
    ("actions.delete", "Excluir"),
    ("deploy.idle", "Publicar"),
    ("deploy.building", "Construindo..."),
    ("deploy.zipping", "Empacotando..."),
    ("deploy.deploying", "Publicando..."),
    ("deploy.deployed", "Publicado"),
    ("deploy.redeploy", "Republicar"),
    ("deploy.viewSite", "Ver site"),
    ("deploy.tooltipDeploy", "Clique para publicar sua aplicação"),
    ("deploy.tooltipRedeploy", "Clique para publicar novamente"),
    ("share.title", "Compartilhar projeto"),
    ("share.saving", "Salvando..."),
    ("share.saved", "Salvo"),
    ("share.saveSettings", "Salvar configurações"),
    ("share.setThumbnail", "Definir Miniatura"),
    ("share.copyLink", "Copiar link"),
    ("share.openInNewTab", "Abrir em nova aba"),
    ("messages.success.linkCopied", "Link copiado para a área de transferência!"),
    ("messages.success.settingsSaved", "Configurações de compartilhamento salvas"),
    ("messages.error.deployFailed", "Falha ao publicar. Tente novamente."),
    (
        "messages.error.shareFailed",
        "Falha ao atualizar configurações de compartilhamento. Tente novamente.",
    ),
    ("messages.error.snapshotFailed", "Falha ao criar snapshot. Tente novamente."),
    ("messages.error.updateFileFailed", "Falha ao atualizar conteúdo do arquivo"),
    ("terminal.devServer", "Servidor Dev"),
    ("terminal.convexDeploy", "Deploy Convex"),
    ("terminal.terminal", "Terminal"),
    ("general.loading", "Carregando..."),
    ("general.error", "Erro"),
    ("general.success", "Sucesso"),
    ("general.warning", "Aviso"),
    ("general.info", "Informação"),
];

/// Paths that name sections rather than messages
pub const SECTION_PATHS: &[&str] = &[
    "header",
    "actions",
    "deploy",
    "share",
    "messages",
    "messages.success",
    "messages.error",
    "terminal",
    "general",
];
